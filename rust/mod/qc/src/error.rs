use billetqc_sheet::SheetError;
use thiserror::Error;

use crate::label::LabelError;

#[derive(Error, Debug)]
pub enum QcError {
    /// Submission rejected before evaluation (unknown grade, bad box, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Batch file could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Stored row could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Store(#[from] SheetError),

    #[error(transparent)]
    Label(#[from] LabelError),
}
