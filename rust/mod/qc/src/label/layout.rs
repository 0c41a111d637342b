//! Fixed label geometry. Coordinates are PDF points measured from the
//! lower-left corner of the page.

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

pub const PAGE_SIZE: f32 = 100.0 * MM;

pub const FRAME_ORIGIN: f32 = 2.0 * MM;
pub const FRAME_SIZE: f32 = 96.0 * MM;

pub const TITLE: &str = "PRODUCTION & QC LABEL";
pub const TITLE_FONT_SIZE: f32 = 14.0;
pub const TITLE_CENTER_X: f32 = 50.0 * MM;
pub const TITLE_Y: f32 = 90.0 * MM;

pub const BODY_FONT_SIZE: f32 = 10.0;
pub const BODY_X: f32 = 10.0 * MM;
pub const BODY_TOP_Y: f32 = 75.0 * MM;
pub const BODY_LINE_STEP: f32 = 7.0 * MM;

/// The QR symbol, quiet zone included, fills this square.
pub const QR_X: f32 = 35.0 * MM;
pub const QR_Y: f32 = 5.0 * MM;
pub const QR_SIZE: f32 = 30.0 * MM;

/// Baseline of body line `index` (0-based).
pub fn body_line_y(index: usize) -> f32 {
    BODY_TOP_Y - index as f32 * BODY_LINE_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn page_is_100mm_square() {
        assert!(approx(PAGE_SIZE, 283.4646));
    }

    #[test]
    fn body_lines_descend_7mm() {
        assert!(approx(body_line_y(0), 75.0 * MM));
        assert!(approx(body_line_y(6), 33.0 * MM));
    }

    #[test]
    fn qr_fits_inside_frame() {
        assert!(QR_Y + QR_SIZE <= FRAME_ORIGIN + FRAME_SIZE);
        assert!(QR_X + QR_SIZE <= FRAME_ORIGIN + FRAME_SIZE);
    }
}
