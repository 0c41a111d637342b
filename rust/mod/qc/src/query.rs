//! Read-side queries over stored rows: archive search, verdict tally and
//! per-strand deviation trends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::InspectionStatus;
use crate::store::StoredRow;

/// Rows whose heat number or storage location contains `needle`
/// (case-sensitive). An empty needle matches nothing.
pub fn search<'a>(rows: &'a [StoredRow], needle: &str) -> Vec<&'a StoredRow> {
    if needle.is_empty() {
        return Vec::new();
    }
    rows.iter()
        .filter(|r| r.heat.contains(needle) || r.storage_loc.contains(needle))
        .collect()
}

/// PASS / REJECT counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub pass: usize,
    pub reject: usize,
}

impl StatusTally {
    pub fn from_rows(rows: &[StoredRow]) -> Self {
        rows.iter().fold(Self::default(), |mut t, r| {
            match r.status {
                InspectionStatus::Pass => t.pass += 1,
                InspectionStatus::Reject => t.reject += 1,
            }
            t
        })
    }

    pub fn total(&self) -> usize {
        self.pass + self.reject
    }

    /// Share of rejected strands, 0.0 when there are no rows.
    pub fn reject_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.reject as f64 / self.total() as f64
        }
    }
}

/// One point of a deviation trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationPoint {
    pub timestamp: String,
    pub rh: f64,
}

/// Deviation over time, grouped by strand id and ordered by timestamp.
/// Timestamps sort lexically because they are `%Y-%m-%d %H:%M:%S`.
pub fn deviation_series(rows: &[StoredRow]) -> BTreeMap<String, Vec<DeviationPoint>> {
    let mut series: BTreeMap<String, Vec<DeviationPoint>> = BTreeMap::new();
    for row in rows {
        series.entry(row.strand.clone()).or_default().push(DeviationPoint {
            timestamp: row.timestamp.clone(),
            rh: row.rh,
        });
    }
    for points in series.values_mut() {
        points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(heat: &str, loc: &str, strand: &str, ts: &str, rh: f64) -> StoredRow {
        StoredRow {
            timestamp: ts.into(),
            date_only: ts[..10].into(),
            time_only: ts[11..].into(),
            shift: "A".into(),
            operator: "Sami".into(),
            inspector: "Admin".into(),
            ccm: "CCM01".into(),
            heat: heat.into(),
            grade: "B500".into(),
            strand: strand.into(),
            rh,
            status: if rh <= 8.0 {
                InspectionStatus::Pass
            } else {
                InspectionStatus::Reject
            },
            d1: 150.0,
            d2: 150.0 - rh,
            billet_count: 40,
            storage_loc: loc.into(),
            short_billet_length: 0.0,
            sample_info: "None".into(),
        }
    }

    fn rows() -> Vec<StoredRow> {
        vec![
            row("H100", "RM01 (Box 2)", "S01", "2025-03-14 07:30:05", 1.5),
            row("H100", "RM01 (Box 2)", "S02", "2025-03-14 07:30:05", 9.0),
            row("H201", "SMS (Box 7)", "S01", "2025-03-13 22:10:00", 2.0),
        ]
    }

    #[test]
    fn search_by_heat_or_location() {
        let rows = rows();
        assert_eq!(search(&rows, "H100").len(), 2);
        assert_eq!(search(&rows, "SMS").len(), 1);
        assert_eq!(search(&rows, "Box").len(), 3);
        assert!(search(&rows, "sms").is_empty());
        assert!(search(&rows, "").is_empty());
    }

    #[test]
    fn tally() {
        let t = StatusTally::from_rows(&rows());
        assert_eq!(t, StatusTally { pass: 2, reject: 1 });
        assert_eq!(t.total(), 3);
        assert!((t.reject_rate() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(StatusTally::default().reject_rate(), 0.0);
    }

    #[test]
    fn series_grouped_and_sorted() {
        let series = deviation_series(&rows());
        assert_eq!(series.len(), 2);
        let s01 = &series["S01"];
        assert_eq!(s01.len(), 2);
        assert_eq!(s01[0].timestamp, "2025-03-13 22:10:00");
        assert_eq!(s01[1].rh, 1.5);
        assert_eq!(series["S02"][0].rh, 9.0);
    }
}
