use crate::error::SheetError;

/// SheetStore is an append-only tabular store organised as named worksheets.
///
/// Each row is an opaque byte payload (the record layer above decides the
/// encoding). Rows are numbered from 0 per worksheet in append order and are
/// never rewritten or removed.
pub trait SheetStore: Send + Sync {
    /// Append rows to a worksheet, creating it on first use.
    /// Returns the row number assigned to the first appended row.
    fn append(&self, worksheet: &str, rows: &[Vec<u8>]) -> Result<u64, SheetError>;

    /// Read every row of a worksheet in append order.
    /// An unknown worksheet reads as empty.
    fn read_all(&self, worksheet: &str) -> Result<Vec<Vec<u8>>, SheetError>;

    /// Number of rows stored in a worksheet.
    fn row_count(&self, worksheet: &str) -> Result<u64, SheetError>;

    /// Names of all worksheets that hold at least one row, sorted.
    fn worksheets(&self) -> Result<Vec<String>, SheetError>;
}

/// Worksheet names become key prefixes (`{worksheet}:{row}`), so they must be
/// non-empty and free of the `:` separator.
pub fn validate_worksheet_name(worksheet: &str) -> Result<(), SheetError> {
    if worksheet.is_empty() || worksheet.contains(':') {
        return Err(SheetError::InvalidWorksheet(worksheet.to_string()));
    }
    Ok(())
}
