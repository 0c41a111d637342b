//! Heat label renderer.
//!
//! A label is a 100mm × 100mm PDF page: a border frame, a centred title, the
//! batch fields as left-aligned lines and a QR code carrying
//! `HEAT:{heat}|LOC:{storage}` so a scanner can locate the billet stack.

pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod qr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::model::BatchFields;
use qr::QrMatrix;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Payload does not fit any QR version.
    #[error("QR encoding failed: {0}")]
    Qr(String),
}

/// Fields printed on a heat label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDocument {
    pub heat_number: String,
    pub grade: String,
    pub machine_id: String,
    /// Printed as-is, normally `YYYY-MM-DD`.
    pub date: String,
    pub storage_location: String,
    pub billet_count: u32,
    /// Metres; the "Short Billet" line is printed only when positive.
    pub short_billet_length: f64,
}

/// A rendered label ready to hand to the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFile {
    /// `{heat}.pdf`.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl LabelDocument {
    pub fn from_batch(batch: &BatchFields, date: NaiveDate) -> Self {
        Self {
            heat_number: batch.heat_number.clone(),
            grade: batch.grade.clone(),
            machine_id: batch.machine_id.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            storage_location: batch.storage.to_string(),
            billet_count: batch.billet_count,
            short_billet_length: batch.short_billet_length,
        }
    }

    pub fn qr_payload(&self) -> String {
        format!("HEAT:{}|LOC:{}", self.heat_number, self.storage_location)
    }

    /// Body lines in print order.
    pub fn body_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Heat No: {}", self.heat_number),
            format!("Grade: {}", self.grade),
            format!("Storage: {}", self.storage_location),
            format!("Billet Count: {}", self.billet_count),
            format!("CCM: {}", self.machine_id),
            format!("Date: {}", self.date),
        ];
        if self.short_billet_length > 0.0 {
            lines.push(format!(
                "Short Billet: {} m",
                format_decimal(self.short_billet_length)
            ));
        }
        lines
    }

    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.heat_number)
    }

    /// Render the label to PDF bytes. Identical documents render to
    /// identical bytes.
    pub fn render(&self) -> Result<Vec<u8>, LabelError> {
        let qr = QrMatrix::encode(&self.qr_payload())?;
        let bytes = pdf::write_label(layout::TITLE, &self.body_lines(), &qr);
        debug!(
            heat = %self.heat_number,
            qr_modules = qr.width(),
            size = bytes.len(),
            "label rendered"
        );
        Ok(bytes)
    }

    pub fn render_file(&self) -> Result<LabelFile, LabelError> {
        Ok(LabelFile {
            file_name: self.file_name(),
            bytes: self.render()?,
        })
    }
}

/// Format a float the way a decimal literal reads: whole numbers keep one
/// decimal ("3.0"), others print their shortest exact form ("2.5").
///
/// Very small or very large values print in positional notation
/// (`0.00001`), never in exponent form (`1e-05`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
