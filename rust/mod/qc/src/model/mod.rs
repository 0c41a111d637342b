pub mod batch;
pub mod measurement;
pub mod record;

pub use batch::{BatchFields, DEFAULT_INSPECTOR, BatchSubmission, StorageLocation, StrandEntry};
pub use measurement::{MeasurementInput, STRAND_COUNT};
pub use record::{InspectionRecord, InspectionStatus, SampleInfo};
