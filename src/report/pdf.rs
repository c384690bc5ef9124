//! PDF typesetting for rendered report bodies

use crate::core::error::AppError;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_STEP: f32 = 6.0;
const FONT_SIZE: f32 = 11.0;

/// Typeset a plain-text body onto A4 pages and return the raw PDF bytes.
pub(crate) fn typeset(title: &str, body: &str) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Render(format!("failed to load font: {}", e)))?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in body.lines() {
        if y < MARGIN {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
        }
        layer_ref.use_text(line, FONT_SIZE, Mm(MARGIN), Mm(y), &font);
        y -= LINE_STEP;
    }

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| AppError::Render(format!("failed to serialize PDF: {}", e)))?;
    writer
        .into_inner()
        .map_err(|e| AppError::Render(format!("failed to flush PDF buffer: {}", e)))
}
