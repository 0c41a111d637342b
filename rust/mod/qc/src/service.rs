//! Submission service — validate, evaluate, store, label.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::QcError;
use crate::evaluator::evaluate;
use crate::label::{LabelDocument, LabelFile};
use crate::model::{BatchSubmission, InspectionRecord, InspectionStatus};
use crate::site::SiteConfig;
use crate::store::RecordSink;

/// Result of one submission.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Records produced, in strand order. Empty when no strand was measured.
    pub records: Vec<InspectionRecord>,

    /// The heat label; `None` when no record was produced.
    pub label: Option<LabelFile>,
}

impl SubmissionOutcome {
    pub fn rejected(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == InspectionStatus::Reject)
            .count()
    }
}

pub struct InspectionService {
    site: SiteConfig,
    sink: Arc<dyn RecordSink>,
}

impl InspectionService {
    pub fn new(site: SiteConfig, sink: Arc<dyn RecordSink>) -> Self {
        Self { site, sink }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Validate and evaluate without touching the sink or rendering a label.
    pub fn preview(
        &self,
        submission: &BatchSubmission,
        at: NaiveDateTime,
    ) -> Result<Vec<InspectionRecord>, QcError> {
        self.site.check_submission(submission)?;
        Ok(evaluate(&submission.batch, &submission.strands, at))
    }

    /// Validate, evaluate, append the records and render the heat label.
    /// A heat with no measured strand writes nothing and gets no label.
    pub fn submit(
        &self,
        submission: &BatchSubmission,
        at: NaiveDateTime,
    ) -> Result<SubmissionOutcome, QcError> {
        let records = self.preview(submission, at)?;
        if records.is_empty() {
            info!(heat = %submission.batch.heat_number, "no strand measured, nothing stored");
            return Ok(SubmissionOutcome {
                records,
                label: None,
            });
        }

        let written = self.sink.append(&records)?;
        let label = LabelDocument::from_batch(&submission.batch, at.date()).render_file()?;

        let outcome = SubmissionOutcome {
            records,
            label: Some(label),
        };
        info!(
            heat = %submission.batch.heat_number,
            written,
            rejected = outcome.rejected(),
            "submission stored"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BatchFields, MeasurementInput, StorageLocation};
    use crate::site::default_config;
    use crate::store::{RecordSource, SheetRecords, DEFAULT_WORKSHEET};
    use billetqc_sheet::MemorySheet;
    use chrono::NaiveDate;

    fn submission() -> BatchSubmission {
        let mut strands = MeasurementInput::blank_strands();
        strands[0] = MeasurementInput::new(1, 150.0, 149.0);
        strands[2] = MeasurementInput::new(3, 152.0, 140.0).with_sample("1");
        BatchSubmission {
            batch: BatchFields {
                heat_number: "H100".into(),
                grade: "B500".into(),
                machine_id: "CCM01".into(),
                shift: "A".into(),
                operator: "Sami".into(),
                inspector: "Admin".into(),
                billet_count: 40,
                storage: StorageLocation::new("RM01", 2),
                short_billet_length: 0.0,
            },
            strands,
        }
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(7, 30, 5)
            .unwrap()
    }

    fn service() -> (Arc<SheetRecords>, InspectionService) {
        let records = Arc::new(SheetRecords::new(
            Arc::new(MemorySheet::new()),
            DEFAULT_WORKSHEET,
        ));
        let service = InspectionService::new(default_config(), records.clone());
        (records, service)
    }

    #[test]
    fn submit_stores_and_labels() {
        let (store, service) = service();
        let outcome = service.submit(&submission(), at()).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.rejected(), 1);

        let label = outcome.label.unwrap();
        assert_eq!(label.file_name, "H100.pdf");
        let expected = LabelDocument::from_batch(&submission().batch, at().date())
            .render()
            .unwrap();
        assert_eq!(label.bytes, expected);

        let rows = store.fetch_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].sample_info, "S3-#1");
    }

    #[test]
    fn nothing_measured_writes_nothing() {
        let (store, service) = service();
        let mut sub = submission();
        sub.strands = MeasurementInput::blank_strands();

        let outcome = service.submit(&sub, at()).unwrap();
        assert!(outcome.records.is_empty());
        assert!(outcome.label.is_none());
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn invalid_submission_writes_nothing() {
        let (store, service) = service();
        let mut sub = submission();
        sub.batch.shift = "Z".into();

        assert!(matches!(
            service.submit(&sub, at()),
            Err(QcError::Validation(_))
        ));
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn preview_does_not_store() {
        let (store, service) = service();
        let records = service.preview(&submission(), at()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(store.fetch_all().unwrap().is_empty());
    }
}
