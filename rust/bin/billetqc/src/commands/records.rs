//! `billetqc records`, `summary` and `trend` — read side of the production log.

use anyhow::Result;
use billetqc::query::{deviation_series, search, StatusTally};
use billetqc::{RecordSource, StoredRow};

use crate::config::ClientConfig;

pub fn list(config: &ClientConfig, needle: Option<&str>, json_output: bool) -> Result<()> {
    let all = super::open_records(config)?.fetch_all()?;
    let rows: Vec<&StoredRow> = match needle {
        Some(n) => search(&all, n),
        None => all.iter().collect(),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No records.");
        return Ok(());
    }

    println!(
        "{:<19}  {:<10} {:<7} {:<6} {:>7} {:<7} {:<14} {}",
        "TIMESTAMP", "HEAT", "GRADE", "STRAND", "RH", "STATUS", "STORAGE", "SAMPLE"
    );
    for r in &rows {
        println!(
            "{:<19}  {:<10} {:<7} {:<6} {:>7.2} {:<7} {:<14} {}",
            r.timestamp,
            r.heat,
            r.grade,
            r.strand,
            r.rh,
            r.status.as_str(),
            r.storage_loc,
            r.sample_info
        );
    }
    println!("{} row(s)", rows.len());
    Ok(())
}

pub fn summary(config: &ClientConfig, json_output: bool) -> Result<()> {
    let rows = super::open_records(config)?.fetch_all()?;
    let tally = StatusTally::from_rows(&rows);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&tally)?);
        return Ok(());
    }

    println!("PASS    {}", tally.pass);
    println!("REJECT  {}", tally.reject);
    println!("TOTAL   {}", tally.total());
    println!("Reject rate: {:.1}%", tally.reject_rate() * 100.0);
    Ok(())
}

pub fn trend(config: &ClientConfig, json_output: bool) -> Result<()> {
    let rows = super::open_records(config)?.fetch_all()?;
    let series = deviation_series(&rows);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    for (strand, points) in &series {
        println!("{}", strand);
        for p in points {
            println!("  {}  {:>7.2}", p.timestamp, p.rh);
        }
    }
    Ok(())
}
