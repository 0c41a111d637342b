use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::SheetError;
use crate::traits::{validate_worksheet_name, SheetStore};

/// MemorySheet keeps worksheets in process memory. Used for tests and for
/// dry runs where nothing may touch the shared store.
#[derive(Default)]
pub struct MemorySheet {
    sheets: RwLock<BTreeMap<String, Vec<Vec<u8>>>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SheetStore for MemorySheet {
    fn append(&self, worksheet: &str, rows: &[Vec<u8>]) -> Result<u64, SheetError> {
        validate_worksheet_name(worksheet)?;
        let mut sheets = self.sheets.write().unwrap();
        let sheet = sheets.entry(worksheet.to_string()).or_default();
        let first = sheet.len() as u64;
        sheet.extend(rows.iter().cloned());
        if sheet.is_empty() {
            sheets.remove(worksheet);
        }
        Ok(first)
    }

    fn read_all(&self, worksheet: &str) -> Result<Vec<Vec<u8>>, SheetError> {
        validate_worksheet_name(worksheet)?;
        let sheets = self.sheets.read().unwrap();
        Ok(sheets.get(worksheet).cloned().unwrap_or_default())
    }

    fn row_count(&self, worksheet: &str) -> Result<u64, SheetError> {
        validate_worksheet_name(worksheet)?;
        let sheets = self.sheets.read().unwrap();
        Ok(sheets.get(worksheet).map(|s| s.len() as u64).unwrap_or(0))
    }

    fn worksheets(&self) -> Result<Vec<String>, SheetError> {
        let sheets = self.sheets.read().unwrap();
        Ok(sheets.keys().cloned().collect())
    }
}
