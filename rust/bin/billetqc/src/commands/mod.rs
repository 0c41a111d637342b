pub mod inspect;
pub mod label;
pub mod records;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use billetqc::SheetRecords;
use billetqc_sheet::RedbSheet;

use crate::config::ClientConfig;

/// Open the configured record store, creating its directory on first use.
pub fn open_records(config: &ClientConfig) -> Result<SheetRecords> {
    let path = config.store_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let sheet = RedbSheet::open(&path)
        .map_err(|e| anyhow::anyhow!("failed to open record store {}: {}", path.display(), e))?;
    Ok(SheetRecords::new(Arc::new(sheet), config.worksheet.clone()))
}

/// Write label bytes, creating the parent directory if needed.
pub fn write_label(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
