//! QR symbol as a module grid, ready to be painted as filled squares.

use qrcode::{Color, EcLevel, QrCode};

use super::LabelError;

/// Light modules surrounding the symbol on every side.
pub const QUIET_ZONE: usize = 4;

/// A QR symbol's dark/light modules, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// Encode `payload` at error-correction level L, choosing the smallest
    /// version that fits.
    pub fn encode(payload: &str) -> Result<Self, LabelError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .map_err(|e| LabelError::Qr(e.to_string()))?;
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Ok(Self {
            width: code.width(),
            dark,
        })
    }

    /// Modules per side, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Modules per side including the quiet zone on both edges.
    pub fn span(&self) -> usize {
        self.width + 2 * QUIET_ZONE
    }

    pub fn is_dark(&self, col: usize, row: usize) -> bool {
        self.dark[row * self.width + col]
    }

    /// Dark modules as (col, row) pairs in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.dark
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d)
            .map(move |(i, _)| (i % width, i / width))
    }
}
