//! Renders a [`LayoutDocument`] to PDF bytes with `printpdf`.
//!
//! Layout positions are top-down millimeters with the baseline at `y_mm`;
//! PDF coordinates grow upward from the bottom-left corner, so emission
//! flips the y axis. Fonts are the PDF built-in Helvetica faces, matching
//! the metric tables used during layout.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Rgb as PdfRgb};

use crate::export::font_metrics::FontStyle;
use crate::export::layout::LayoutDocument;
use crate::export::service::ExportError;
use crate::export::theme::Rgb;

pub fn render(layout: &LayoutDocument, title: &str) -> Result<Vec<u8>, ExportError> {
    let setup = &layout.setup;
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(setup.page_width_mm),
        Mm(setup.page_height_mm),
        "Layer 1",
    );

    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..layout.pages.len() {
        page_refs.push(pdf.add_page(
            Mm(setup.page_width_mm),
            Mm(setup.page_height_mm),
            "Layer 1",
        ));
    }

    for (page, (page_idx, layer_idx)) in layout.pages.iter().zip(page_refs) {
        let layer = pdf.get_page(page_idx).get_layer(layer_idx);
        for text in &page.texts {
            layer.set_fill_color(fill_color(text.color));
            let font: &IndirectFontRef = match text.style {
                FontStyle::Bold => &bold,
                FontStyle::Regular => &regular,
            };
            layer.use_text(
                text.text.clone(),
                text.font_size_pt,
                Mm(text.x_mm),
                Mm(setup.page_height_mm - text.y_mm),
                font,
            );
        }
    }

    pdf.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn fill_color(color: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}
