//! Drawing surface abstraction used by badge templates

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::BadgeResult;

/// Axis-aligned rectangle in points, origin at its bottom left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// How glyphs are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Fill,
    /// Fill with the fill color, outline with the stroke color
    FillStroke,
}

/// The drawing primitives a badge needs from a page.
///
/// Coordinates are points (1/72 inch) from the bottom left of the page.
pub trait PageCanvas {
    fn set_fill_color(&mut self, color: Rgb) -> BadgeResult<()>;

    fn set_stroke_color(&mut self, color: Rgb, thickness: f32) -> BadgeResult<()>;

    /// Fill with the current fill color.
    fn fill_rect(&mut self, rect: Rect) -> BadgeResult<()>;

    /// Draw `text` with its baseline starting at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, mode: TextMode) -> BadgeResult<()>;
}

/// Per-device calibration offset in points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Wraps a canvas and shifts every drawn coordinate by a fixed offset
pub struct Translated<'a, C: PageCanvas + ?Sized> {
    inner: &'a mut C,
    dx: f32,
    dy: f32,
}

impl<'a, C: PageCanvas + ?Sized> Translated<'a, C> {
    pub fn new(inner: &'a mut C, offset: Offset) -> Self {
        Self {
            inner,
            dx: offset.x as f32,
            dy: offset.y as f32,
        }
    }
}

impl<C: PageCanvas + ?Sized> PageCanvas for Translated<'_, C> {
    fn set_fill_color(&mut self, color: Rgb) -> BadgeResult<()> {
        self.inner.set_fill_color(color)
    }

    fn set_stroke_color(&mut self, color: Rgb, thickness: f32) -> BadgeResult<()> {
        self.inner.set_stroke_color(color, thickness)
    }

    fn fill_rect(&mut self, rect: Rect) -> BadgeResult<()> {
        self.inner.fill_rect(Rect {
            x: rect.x + self.dx,
            y: rect.y + self.dy,
            ..rect
        })
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, mode: TextMode) -> BadgeResult<()> {
        self.inner.draw_text(text, x + self.dx, y + self.dy, size, mode)
    }
}
