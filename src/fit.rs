//! Shrink-to-fit text sizing for fixed badge regions

use tracing::debug;

use crate::metrics::FontMetrics;

/// Horizontal placement of text relative to the field anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

/// A named, positioned, size-bounded text region on a badge.
///
/// Coordinates are in points (1/72 inch) from the bottom left of the page;
/// `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutField {
    pub name: &'static str,
    pub x: f32,
    pub y: f32,
    pub max_width: f32,
    pub font_size: f32,
    pub min_font_size: f32,
    pub align: Align,
    /// Only single-line fields are supported
    pub lines: u32,
}

impl LayoutField {
    pub const fn new(name: &'static str, x: f32, y: f32, max_width: f32, font_size: f32) -> Self {
        Self {
            name,
            x,
            y,
            max_width,
            font_size,
            min_font_size: 8.0,
            align: Align::Left,
            lines: 1,
        }
    }

    pub const fn min_font_size(mut self, size: f32) -> Self {
        self.min_font_size = size;
        self
    }

    pub const fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub const fn right_aligned(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Where and how large to draw a string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub size: f32,
    pub origin_x: f32,
    /// Rendered width at `size`
    pub width: f32,
    /// The text is wider than the field even at the minimum font size
    pub overflow: bool,
}

/// Compute the font size and origin that keep `text` inside `field`.
///
/// Text that does not fit at the nominal size is scaled down, but never below
/// `field.min_font_size`; at the floor the text is allowed to overflow.
pub fn fit(text: &str, metrics: &dyn FontMetrics, field: &LayoutField) -> Fit {
    let units = metrics.text_width(text);
    let per_em = metrics.units_per_em();

    let mut size = field.font_size;
    let mut overflow = false;

    if units * size / per_em > field.max_width {
        size = field.max_width * per_em / units;
        if size < field.min_font_size {
            size = field.min_font_size;
            overflow = true;
            debug!(
                field = field.name,
                text,
                size,
                "text overflows field at minimum font size"
            );
        }
    }

    let width = units * size / per_em;
    let origin_x = match field.align {
        Align::Left => field.x,
        Align::Center => field.x - width / 2.0,
        Align::Right => field.x - width,
    };

    Fit {
        size,
        origin_x,
        width,
        overflow,
    }
}
