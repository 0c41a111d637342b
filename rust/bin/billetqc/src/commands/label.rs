//! `billetqc label` — render a heat label on its own.

use std::path::PathBuf;

use anyhow::Result;
use billetqc::LabelDocument;
use tracing::info;

use crate::config::ClientConfig;

pub fn run(config: &ClientConfig, doc: &LabelDocument, out: Option<&str>) -> Result<()> {
    let path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| config.label_dir().join(doc.file_name()));
    let bytes = doc.render()?;
    super::write_label(&path, &bytes)?;

    info!(heat = %doc.heat_number, path = %path.display(), "label written");
    println!("Label written to {}", path.display());
    Ok(())
}
