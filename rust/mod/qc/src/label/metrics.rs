//! Glyph advance widths for the standard Helvetica-Bold font, used to centre
//! the label title. Units are 1/1000 of the font size.

/// Widths for the printable ASCII range 0x20..=0x7E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' .. '9'
    333, 333, 584, 584, 584, 611, 975, // ':' .. '@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' .. 'Z'
    333, 278, 333, 584, 556, 333, // '[' .. '`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a' .. 'm'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n' .. 'z'
    389, 280, 389, 584, // '{' .. '~'
];

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(byte: u8) -> u16 {
    match byte {
        0x20..=0x7E => HELVETICA_BOLD[(byte - 0x20) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Advance width of already-encoded text set in Helvetica-Bold at `size` pt.
pub fn helvetica_bold_width(text: &[u8], size: f32) -> f32 {
    let units: u32 = text.iter().map(|&b| glyph_width(b) as u32).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_width() {
        // 13111 units at 14pt.
        let w = helvetica_bold_width(b"PRODUCTION & QC LABEL", 14.0);
        assert!((w - 183.554).abs() < 1e-3, "got {}", w);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(helvetica_bold_width(b"", 14.0), 0.0);
    }

    #[test]
    fn table_lookup() {
        assert_eq!(glyph_width(b' '), 278);
        assert_eq!(glyph_width(b'W'), 944);
        assert_eq!(glyph_width(b'~'), 584);
        assert_eq!(glyph_width(0xE9), FALLBACK_WIDTH);
    }
}
