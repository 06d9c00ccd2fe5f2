//! PDF export service implementation

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::models::page::DayPage;
use crate::utils::date;

/// Service for exporting plan pages to PDF
pub struct PdfExportService;

/// Export options
pub struct PdfExportOptions {
    /// Document title stored in the PDF metadata
    pub title: String,
    /// Page size (width, height) in mm
    pub page_size: (f32, f32),
    /// Include entry lines on each sheet
    pub include_entries: bool,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: "Plan".to_string(),
            page_size: (210.0, 297.0), // A4 Portrait
            include_entries: true,
        }
    }
}

impl PdfExportService {
    /// Export pages in their current visual order, one sheet per day.
    ///
    /// The slice order is the sheet order, so exporting a plan that is in
    /// booklet arrangement yields a document ready for double-sided
    /// printing and folding. Each sheet's footer carries the page's
    /// reading-order label.
    pub fn export_pages(
        pages: &[DayPage],
        path: &Path,
        options: &PdfExportOptions,
    ) -> Result<()> {
        let (doc, page1, layer1) = PdfDocument::new(
            &options.title,
            Mm(options.page_size.0),
            Mm(options.page_size.1),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .context("Failed to add font")?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .context("Failed to add bold font")?;

        let mut current_layer = doc.get_page(page1).get_layer(layer1);

        let page_width = options.page_size.0;
        let page_height = options.page_size.1;
        let center_x = page_width / 2.0;
        let margin_left = 25.0;

        for (index, day) in pages.iter().enumerate() {
            if index > 0 {
                let (new_page, new_layer) =
                    doc.add_page(Mm(page_width), Mm(page_height), "Layer 1");
                current_layer = doc.get_page(new_page).get_layer(new_layer);
            }

            let mut y = page_height - 30.0;

            // Sheet header
            Self::draw_text(&current_layer, &font_bold, 20.0, center_x, y, &day.title, true);
            y -= 8.0;

            if let Some(day_date) = day.date {
                let label = date::long_day_label(day_date);
                Self::draw_text(&current_layer, &font, 11.0, center_x, y, &label, true);
                y -= 8.0;
            }

            if options.include_entries {
                y -= 6.0;
                for entry in &day.entries {
                    // Continue long sheets on a fresh page
                    if y < 25.0 {
                        let (new_page, new_layer) =
                            doc.add_page(Mm(page_width), Mm(page_height), "Layer 1");
                        current_layer = doc.get_page(new_page).get_layer(new_layer);
                        y = page_height - 30.0;
                    }

                    Self::draw_text(&current_layer, &font, 10.0, margin_left, y, entry, false);
                    y -= 6.0;
                }
            }

            // Footer: reading-order label, so the folded booklet stays navigable
            let label = day.position.to_string();
            Self::draw_text(&current_layer, &font, 9.0, center_x, 12.0, &label, true);
        }

        let file = File::create(path).context("Failed to create PDF file")?;
        let mut writer = BufWriter::new(file);
        doc.save(&mut writer).context("Failed to save PDF")?;

        log::info!("Exported {} sheets to {}", pages.len(), path.display());
        Ok(())
    }

    fn draw_text(
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        size: f32,
        x: f32,
        y: f32,
        text: &str,
        centered: bool,
    ) {
        layer.begin_text_section();
        layer.set_font(font, size);
        layer.set_fill_color(printpdf::Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

        let position = if centered {
            // Approximate centering based on character count
            let approx_width = text.len() as f32 * size * 0.4;
            (Mm(x - approx_width / 2.0), Mm(y))
        } else {
            (Mm(x), Mm(y))
        };

        layer.set_text_cursor(position.0, position.1);
        layer.write_text(text, font);
        layer.end_text_section();
    }
}
