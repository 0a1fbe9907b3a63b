//! PDF output through printpdf's built-in fonts

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;

use crate::builder::DocumentBackend;
use crate::canvas::{PageCanvas, Rect, TextMode};
use crate::color::Rgb as BadgeColor;
use crate::error::{BadgeError, BadgeResult};

/// printpdf positions are in mm, badge layouts in points
const PT_TO_MM: f32 = 25.4 / 72.0;

fn mm(points: f32) -> Mm {
    Mm(points * PT_TO_MM)
}

fn pdf_color(color: BadgeColor) -> Color {
    Color::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

/// A printpdf document with the badge font loaded
pub struct PdfBackend {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
}

impl PdfBackend {
    pub fn new(title: &str) -> BadgeResult<Self> {
        let doc = PdfDocument::empty(title);
        let font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BadgeError::PdfError(e.to_string()))?;
        Ok(Self { doc, font })
    }
}

/// One badge page of a [`PdfBackend`] document
pub struct PdfPage {
    layer: PdfLayerReference,
    font: IndirectFontRef,
}

impl DocumentBackend for PdfBackend {
    type Page = PdfPage;

    fn begin_page(&mut self, width: f32, height: f32) -> BadgeResult<PdfPage> {
        let (page, layer) = self.doc.add_page(mm(width), mm(height), "Badge");
        let layer = self.doc.get_page(page).get_layer(layer);
        Ok(PdfPage {
            layer,
            font: self.font.clone(),
        })
    }

    fn end_page(&mut self, _page: PdfPage) -> BadgeResult<()> {
        // Pages live in the document as soon as they are added
        Ok(())
    }

    fn finish(self) -> BadgeResult<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| BadgeError::PdfError(e.to_string()))
    }
}

impl PageCanvas for PdfPage {
    fn set_fill_color(&mut self, color: BadgeColor) -> BadgeResult<()> {
        self.layer.set_fill_color(pdf_color(color));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: BadgeColor, thickness: f32) -> BadgeResult<()> {
        self.layer.set_outline_color(pdf_color(color));
        self.layer.set_outline_thickness(thickness);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> BadgeResult<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        let points = vec![
            (Point::new(mm(x), mm(y)), false),
            (Point::new(mm(x + width), mm(y)), false),
            (Point::new(mm(x + width), mm(y + height)), false),
            (Point::new(mm(x), mm(y + height)), false),
        ];
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, mode: TextMode) -> BadgeResult<()> {
        let rendering = match mode {
            TextMode::Fill => TextRenderingMode::Fill,
            TextMode::FillStroke => TextRenderingMode::FillStroke,
        };
        self.layer.set_text_rendering_mode(rendering);
        self.layer.use_text(text, size, mm(x), mm(y), &self.font);
        Ok(())
    }
}
