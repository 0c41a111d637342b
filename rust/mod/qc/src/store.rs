//! Record persistence over a worksheet store.
//!
//! Each inspection record becomes one JSON-encoded row in the
//! `production_logs` worksheet, using the column names of the shared
//! production log.

use std::sync::Arc;

use billetqc_sheet::SheetStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QcError;
use crate::model::{InspectionRecord, InspectionStatus};

pub const DEFAULT_WORKSHEET: &str = "production_logs";

/// One row of the production log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    /// `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    pub date_only: String,
    pub time_only: String,
    pub shift: String,
    pub operator: String,
    pub inspector: String,
    pub ccm: String,
    pub heat: String,
    pub grade: String,
    pub strand: String,
    /// Deviation between the two readings.
    pub rh: f64,
    pub status: InspectionStatus,
    pub d1: f64,
    pub d2: f64,
    pub billet_count: u32,
    pub storage_loc: String,
    pub short_billet_length: f64,
    pub sample_info: String,
}

impl From<&InspectionRecord> for StoredRow {
    fn from(r: &InspectionRecord) -> Self {
        Self {
            timestamp: r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            date_only: r.timestamp.format("%Y-%m-%d").to_string(),
            time_only: r.timestamp.format("%H:%M:%S").to_string(),
            shift: r.batch.shift.clone(),
            operator: r.batch.operator.clone(),
            inspector: r.batch.inspector.clone(),
            ccm: r.batch.machine_id.clone(),
            heat: r.batch.heat_number.clone(),
            grade: r.batch.grade.clone(),
            strand: r.strand_id.clone(),
            rh: r.deviation,
            status: r.status,
            d1: r.diameter1,
            d2: r.diameter2,
            billet_count: r.batch.billet_count,
            storage_loc: r.batch.storage.to_string(),
            short_billet_length: r.batch.short_billet_length,
            sample_info: r.sample_info.to_string(),
        }
    }
}

/// Destination for new inspection records.
pub trait RecordSink: Send + Sync {
    /// Append records in the given order. Returns the number written.
    fn append(&self, records: &[InspectionRecord]) -> Result<usize, QcError>;
}

/// Read access to previously stored records.
pub trait RecordSource: Send + Sync {
    /// Every stored row, oldest first.
    fn fetch_all(&self) -> Result<Vec<StoredRow>, QcError>;
}

/// RecordSink and RecordSource over one worksheet of a SheetStore.
pub struct SheetRecords {
    sheet: Arc<dyn SheetStore>,
    worksheet: String,
}

impl SheetRecords {
    pub fn new(sheet: Arc<dyn SheetStore>, worksheet: impl Into<String>) -> Self {
        Self {
            sheet,
            worksheet: worksheet.into(),
        }
    }

    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }
}

impl RecordSink for SheetRecords {
    fn append(&self, records: &[InspectionRecord]) -> Result<usize, QcError> {
        let rows = records
            .iter()
            .map(|r| {
                serde_json::to_vec(&StoredRow::from(r))
                    .map_err(|e| QcError::Serialization(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let first = self.sheet.append(&self.worksheet, &rows)?;
        debug!(
            "SheetRecords: wrote {} rows to {} from row {}",
            rows.len(),
            self.worksheet,
            first
        );
        Ok(rows.len())
    }
}

impl RecordSource for SheetRecords {
    fn fetch_all(&self) -> Result<Vec<StoredRow>, QcError> {
        self.sheet
            .read_all(&self.worksheet)?
            .iter()
            .map(|bytes| {
                serde_json::from_slice(bytes).map_err(|e| QcError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::model::{BatchFields, MeasurementInput, StorageLocation};
    use billetqc_sheet::{MemorySheet, RedbSheet};
    use chrono::NaiveDate;

    fn records() -> Vec<InspectionRecord> {
        let batch = BatchFields {
            heat_number: "H100".into(),
            grade: "B500".into(),
            machine_id: "CCM01".into(),
            shift: "A".into(),
            operator: "Sami".into(),
            inspector: "Admin".into(),
            billet_count: 40,
            storage: StorageLocation::new("RM01", 2),
            short_billet_length: 2.5,
        };
        let mut strands = MeasurementInput::blank_strands();
        strands[0] = MeasurementInput::new(1, 150.0, 148.5);
        strands[1] = MeasurementInput::new(2, 160.0, 150.0).with_sample("3");
        let at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(7, 30, 5)
            .unwrap();
        evaluate(&batch, &strands, at)
    }

    #[test]
    fn row_columns() {
        let recs = records();
        let row = StoredRow::from(&recs[1]);
        assert_eq!(row.timestamp, "2025-03-14 07:30:05");
        assert_eq!(row.date_only, "2025-03-14");
        assert_eq!(row.time_only, "07:30:05");
        assert_eq!(row.ccm, "CCM01");
        assert_eq!(row.heat, "H100");
        assert_eq!(row.strand, "S02");
        assert_eq!(row.rh, 10.0);
        assert_eq!(row.status, InspectionStatus::Reject);
        assert_eq!(row.storage_loc, "RM01 (Box 2)");
        assert_eq!(row.sample_info, "S2-#3");
        assert_eq!(StoredRow::from(&recs[0]).sample_info, "None");
    }

    #[test]
    fn row_json_uses_log_column_names() {
        let row = StoredRow::from(&records()[0]);
        let json: serde_json::Value = serde_json::to_value(&row).unwrap();
        for col in [
            "timestamp",
            "date_only",
            "time_only",
            "shift",
            "operator",
            "inspector",
            "ccm",
            "heat",
            "grade",
            "strand",
            "rh",
            "status",
            "d1",
            "d2",
            "billet_count",
            "storage_loc",
            "short_billet_length",
            "sample_info",
        ] {
            assert!(json.get(col).is_some(), "missing column {}", col);
        }
        assert_eq!(json["status"], "PASS");
    }

    #[test]
    fn append_then_fetch_memory() {
        let store = SheetRecords::new(Arc::new(MemorySheet::new()), DEFAULT_WORKSHEET);
        assert_eq!(store.append(&records()).unwrap(), 2);
        assert_eq!(store.append(&records()).unwrap(), 2);

        let rows = store.fetch_all().unwrap();
        assert_eq!(rows.len(), 4);
        let strands: Vec<&str> = rows.iter().map(|r| r.strand.as_str()).collect();
        assert_eq!(strands, vec!["S01", "S02", "S01", "S02"]);
    }

    #[test]
    fn append_then_fetch_redb() {
        let tmp = tempfile::TempDir::new().unwrap();
        let sheet = RedbSheet::open(&tmp.path().join("qc.redb")).unwrap();
        let store = SheetRecords::new(Arc::new(sheet), DEFAULT_WORKSHEET);
        store.append(&records()).unwrap();

        let rows = store.fetch_all().unwrap();
        assert_eq!(rows, records().iter().map(StoredRow::from).collect::<Vec<_>>());
    }

    #[test]
    fn corrupt_row_is_serialization_error() {
        let sheet = Arc::new(MemorySheet::new());
        sheet.append(DEFAULT_WORKSHEET, &[b"not json".to_vec()]).unwrap();
        let store = SheetRecords::new(sheet, DEFAULT_WORKSHEET);
        assert!(matches!(store.fetch_all(), Err(QcError::Serialization(_))));
    }
}
