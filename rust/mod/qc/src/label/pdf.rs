//! Single-page PDF emission for the heat label.
//!
//! The output carries no creation date or file identifier, so the bytes
//! depend only on the text lines and the QR matrix.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::layout::*;
use super::metrics::helvetica_bold_width;
use super::qr::{QrMatrix, QUIET_ZONE};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Map text onto WinAnsiEncoding bytes. ASCII and Latin-1 letters map
/// directly; anything else prints as '?'.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Write the label page: frame, centred title, body lines top-down and the
/// QR symbol in the lower-right area.
pub fn write_label(title: &str, lines: &[String], qr: &QrMatrix) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let regular_id = Ref::new(4);
    let bold_id = Ref::new(5);
    let content_id = Ref::new(6);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, PAGE_SIZE, PAGE_SIZE));
    page.parent(page_tree_id);
    page.contents(content_id);
    {
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(REGULAR, regular_id);
        fonts.pair(BOLD, bold_id);
    }
    page.finish();

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut content = Content::new();

    content.set_line_width(1.0);
    content.rect(FRAME_ORIGIN, FRAME_ORIGIN, FRAME_SIZE, FRAME_SIZE);
    content.stroke();

    let title = encode_win_ansi(title);
    let title_x = TITLE_CENTER_X - helvetica_bold_width(&title, TITLE_FONT_SIZE) / 2.0;
    show_text(&mut content, BOLD, TITLE_FONT_SIZE, title_x, TITLE_Y, &title);

    for (i, line) in lines.iter().enumerate() {
        let encoded = encode_win_ansi(line);
        show_text(
            &mut content,
            REGULAR,
            BODY_FONT_SIZE,
            BODY_X,
            body_line_y(i),
            &encoded,
        );
    }

    paint_qr(&mut content, qr);

    pdf.stream(content_id, &content.finish());
    pdf.finish()
}

fn show_text(content: &mut Content, font: Name, size: f32, x: f32, y: f32, text: &[u8]) {
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, y);
    content.show(Str(text));
    content.end_text();
}

/// Paint dark modules as filled squares. The symbol plus its quiet zone is
/// scaled to QR_SIZE; matrix row 0 is the top row, PDF y grows upward.
fn paint_qr(content: &mut Content, qr: &QrMatrix) {
    let span = qr.span();
    let module = QR_SIZE / span as f32;

    content.save_state();
    content.set_fill_gray(0.0);
    for (col, row) in qr.dark_modules() {
        let x = QR_X + (QUIET_ZONE + col) as f32 * module;
        let y = QR_Y + (span - QUIET_ZONE - row - 1) as f32 * module;
        content.rect(x, y, module, module);
    }
    content.fill_nonzero();
    content.restore_state();
}
