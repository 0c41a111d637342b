use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::error::SheetError;
use crate::traits::{validate_worksheet_name, SheetStore};

/// Rows keyed `{worksheet}:{row:012}` so a key range walks one worksheet in
/// append order.
const ROWS: TableDefinition<&str, &[u8]> = TableDefinition::new("rows");

/// Next free row number per worksheet.
const COUNTERS: TableDefinition<&str, u64> = TableDefinition::new("row_counters");

fn storage<E: std::fmt::Display>(e: E) -> SheetError {
    SheetError::Storage(e.to_string())
}

fn row_key(worksheet: &str, row: u64) -> String {
    format!("{}:{:012}", worksheet, row)
}

/// RedbSheet is a SheetStore backed by redb, a pure-Rust embedded database.
///
/// An append runs inside one write transaction: the rows and the counter bump
/// commit together, so concurrent appenders in the same process are
/// serialized by redb's single-writer lock and never reuse a row number.
pub struct RedbSheet {
    db: Arc<Database>,
}

impl RedbSheet {
    /// Open or create a sheet database at the given path.
    pub fn open(path: &Path) -> Result<Self, SheetError> {
        let db = Database::create(path).map_err(storage)?;

        // Both tables must exist before the first read transaction.
        let write_txn = db.begin_write().map_err(storage)?;
        {
            let _rows = write_txn.open_table(ROWS).map_err(storage)?;
            let _counters = write_txn.open_table(COUNTERS).map_err(storage)?;
        }
        write_txn.commit().map_err(storage)?;

        debug!("RedbSheet: opened {:?}", path);
        Ok(Self { db: Arc::new(db) })
    }
}

impl SheetStore for RedbSheet {
    fn append(&self, worksheet: &str, rows: &[Vec<u8>]) -> Result<u64, SheetError> {
        validate_worksheet_name(worksheet)?;

        let write_txn = self.db.begin_write().map_err(storage)?;
        let first = {
            let mut counters = write_txn.open_table(COUNTERS).map_err(storage)?;
            let first = counters
                .get(worksheet)
                .map_err(storage)?
                .map(|v| v.value())
                .unwrap_or(0);
            if rows.is_empty() {
                return Ok(first);
            }

            let mut table = write_txn.open_table(ROWS).map_err(storage)?;
            for (offset, row) in rows.iter().enumerate() {
                let key = row_key(worksheet, first + offset as u64);
                table.insert(key.as_str(), row.as_slice()).map_err(storage)?;
            }
            counters
                .insert(worksheet, first + rows.len() as u64)
                .map_err(storage)?;
            first
        };
        write_txn.commit().map_err(storage)?;

        debug!(
            "RedbSheet: appended {} rows to {} starting at {}",
            rows.len(),
            worksheet,
            first
        );
        Ok(first)
    }

    fn read_all(&self, worksheet: &str) -> Result<Vec<Vec<u8>>, SheetError> {
        validate_worksheet_name(worksheet)?;

        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(ROWS).map_err(storage)?;

        // ';' is the byte after ':', so this range covers exactly this worksheet.
        let start = format!("{}:", worksheet);
        let end = format!("{};", worksheet);

        let mut results = Vec::new();
        let iter = table
            .range(start.as_str()..end.as_str())
            .map_err(storage)?;
        for entry in iter {
            let (_key, value) = entry.map_err(storage)?;
            results.push(value.value().to_vec());
        }
        Ok(results)
    }

    fn row_count(&self, worksheet: &str) -> Result<u64, SheetError> {
        validate_worksheet_name(worksheet)?;

        let read_txn = self.db.begin_read().map_err(storage)?;
        let counters = read_txn.open_table(COUNTERS).map_err(storage)?;
        let count = counters
            .get(worksheet)
            .map_err(storage)?
            .map(|v| v.value())
            .unwrap_or(0);
        Ok(count)
    }

    fn worksheets(&self) -> Result<Vec<String>, SheetError> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let counters = read_txn.open_table(COUNTERS).map_err(storage)?;

        let mut names = Vec::new();
        for entry in counters.iter().map_err(storage)? {
            let (name, count) = entry.map_err(storage)?;
            if count.value() > 0 {
                names.push(name.value().to_string());
            }
        }
        Ok(names)
    }
}
