//! `billetqc inspect -f batch.yaml` — the submission flow.

use std::sync::Arc;

use anyhow::Result;
use billetqc::{BatchSubmission, InspectionRecord, InspectionService};
use serde::Serialize;

use crate::config::ClientConfig;

#[derive(Serialize)]
struct RecordView<'a> {
    strand: &'a str,
    d1: f64,
    d2: f64,
    rh: f64,
    status: &'a str,
    sample_info: &'a str,
}

impl<'a> From<&'a InspectionRecord> for RecordView<'a> {
    fn from(r: &'a InspectionRecord) -> Self {
        Self {
            strand: &r.strand_id,
            d1: r.diameter1,
            d2: r.diameter2,
            rh: r.deviation,
            status: r.status.as_str(),
            sample_info: r.sample_info.as_str(),
        }
    }
}

pub fn run(config: &ClientConfig, batch_text: &str, dry_run: bool, json_output: bool) -> Result<()> {
    let submission = BatchSubmission::from_yaml_with_inspector(batch_text, &config.inspector)?;
    let site = config.site()?;
    let at = chrono::Local::now().naive_local();

    if dry_run {
        site.check_submission(&submission)?;
        let records = billetqc::evaluate(&submission.batch, &submission.strands, at);
        print_records(&submission.batch.heat_number, &records, json_output)?;
        println!("Dry run: nothing stored.");
        return Ok(());
    }

    let sink = Arc::new(super::open_records(config)?);
    let service = InspectionService::new(site, sink);
    let outcome = service.submit(&submission, at)?;

    print_records(&submission.batch.heat_number, &outcome.records, json_output)?;

    match &outcome.label {
        Some(label) => {
            let path = config.label_dir().join(&label.file_name);
            super::write_label(&path, &label.bytes)?;
            println!(
                "Stored {} record(s), {} rejected. Label written to {}",
                outcome.records.len(),
                outcome.rejected(),
                path.display()
            );
        }
        None => println!("No strand measured (all D1 = 0); nothing stored."),
    }
    Ok(())
}

fn print_records(heat: &str, records: &[InspectionRecord], json_output: bool) -> Result<()> {
    let views: Vec<RecordView> = records.iter().map(RecordView::from).collect();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("Heat {}", heat);
    println!(
        "{:<6} {:>9} {:>9} {:>7} {:<7} {}",
        "STRAND", "D1", "D2", "RH", "STATUS", "SAMPLE"
    );
    for v in &views {
        println!(
            "{:<6} {:>9.2} {:>9.2} {:>7.2} {:<7} {}",
            v.strand, v.d1, v.d2, v.rh, v.status, v.sample_info
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billetqc::RecordSource;

    const BATCH: &str = r#"
batch:
  heatNumber: H100
  grade: B500
  machineId: CCM01
  shift: A
  operator: Sami
  billetCount: 40
  storage: { area: RM01, box: 2 }
strands:
  - { strand: 1, d1: 150.0, d2: 148.0 }
  - { strand: 2, d1: 160.0, d2: 150.0, sample: "3" }
"#;

    fn config(tmp: &tempfile::TempDir) -> ClientConfig {
        ClientConfig {
            store_path: tmp.path().join("records.redb").display().to_string(),
            label_dir: tmp.path().join("labels").display().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn inspect_stores_rows_and_writes_label() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = config(&tmp);
        run(&config, BATCH, false, true).unwrap();

        let label = std::fs::read(tmp.path().join("labels").join("H100.pdf")).unwrap();
        assert!(label.starts_with(b"%PDF-"));

        let rows = super::super::open_records(&config).unwrap().fetch_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].status.as_str(), "REJECT");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = config(&tmp);
        run(&config, BATCH, true, false).unwrap();

        assert!(!tmp.path().join("records.redb").exists());
        assert!(!tmp.path().join("labels").exists());
    }

    #[test]
    fn config_inspector_fills_missing_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ClientConfig {
            inspector: "Rami".into(),
            ..config(&tmp)
        };
        run(&config, BATCH, false, false).unwrap();

        let rows = super::super::open_records(&config).unwrap().fetch_all().unwrap();
        assert!(rows.iter().all(|r| r.inspector == "Rami"));
    }

    #[test]
    fn invalid_batch_is_reported() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bad = BATCH.replace("grade: B500", "grade: X9");
        let err = run(&config(&tmp), &bad, false, false).unwrap_err();
        assert!(err.to_string().contains("unknown grade"));
    }
}
