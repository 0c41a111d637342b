use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("invalid worksheet name: {0:?}")]
    InvalidWorksheet(String),

    #[error("storage error: {0}")]
    Storage(String),
}
