//! Billet casting quality control.
//!
//! Turns per-strand diameter readings into PASS/REJECT inspection records,
//! writes them to a worksheet store and renders the 100mm × 100mm heat label
//! (text block plus QR code) as a PDF.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use billetqc::model::{BatchFields, MeasurementInput, StorageLocation};
//! use billetqc::{evaluate, LabelDocument};
//!
//! let batch = BatchFields {
//!     heat_number: "H100".into(),
//!     grade: "B500".into(),
//!     machine_id: "CCM01".into(),
//!     shift: "A".into(),
//!     operator: "Sami".into(),
//!     inspector: "Admin".into(),
//!     billet_count: 40,
//!     storage: StorageLocation::new("RM01", 2),
//!     short_billet_length: 0.0,
//! };
//! let mut strands = MeasurementInput::blank_strands();
//! strands[0] = MeasurementInput::new(1, 150.2, 146.0);
//!
//! let at = chrono::Local::now().naive_local();
//! let records = evaluate(&batch, &strands, at);
//! let pdf = LabelDocument::from_batch(&batch, at.date()).render().unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod evaluator;
pub mod label;
pub mod model;
pub mod query;
pub mod service;
pub mod site;
pub mod store;

pub use error::QcError;
pub use evaluator::{classify, deviation, evaluate, TOLERANCE_MM};
pub use label::{LabelDocument, LabelError, LabelFile};
pub use model::{
    BatchFields, BatchSubmission, InspectionRecord, InspectionStatus, MeasurementInput,
    SampleInfo, StorageLocation, DEFAULT_INSPECTOR, STRAND_COUNT,
};
pub use service::{InspectionService, SubmissionOutcome};
pub use site::{default_config, SiteConfig, SiteConfigError};
pub use store::{RecordSink, RecordSource, SheetRecords, StoredRow, DEFAULT_WORKSHEET};
