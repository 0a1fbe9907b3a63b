//! In-memory canvas and backend that record drawing calls for tests

use std::sync::{Arc, Mutex};

use crate::builder::DocumentBackend;
use crate::canvas::{PageCanvas, Rect, TextMode};
use crate::color::Rgb;
use crate::error::{BadgeError, BadgeResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillColor(Rgb),
    StrokeColor(Rgb, f32),
    FillRect(Rect),
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        mode: TextMode,
    },
}

impl Op {
    /// The same operation with its coordinates moved.
    pub fn translated(&self, dx: f32, dy: f32) -> Op {
        match self {
            Op::FillRect(rect) => Op::FillRect(Rect {
                x: rect.x + dx,
                y: rect.y + dy,
                ..*rect
            }),
            Op::Text {
                text,
                x,
                y,
                size,
                mode,
            } => Op::Text {
                text: text.clone(),
                x: x + dx,
                y: y + dy,
                size: *size,
                mode: *mode,
            },
            other => other.clone(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position, size and mode of the first text equal to `wanted`.
    pub fn text(&self, wanted: &str) -> Option<(f32, f32, f32, TextMode)> {
        self.ops.iter().find_map(|op| match op {
            Op::Text {
                text,
                x,
                y,
                size,
                mode,
            } if text == wanted => Some((*x, *y, *size, *mode)),
            _ => None,
        })
    }
}

impl PageCanvas for RecordingCanvas {
    fn set_fill_color(&mut self, color: Rgb) -> BadgeResult<()> {
        self.ops.push(Op::FillColor(color));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Rgb, thickness: f32) -> BadgeResult<()> {
        self.ops.push(Op::StrokeColor(color, thickness));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> BadgeResult<()> {
        self.ops.push(Op::FillRect(rect));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, mode: TextMode) -> BadgeResult<()> {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            size,
            mode,
        });
        Ok(())
    }
}

/// Pages handed over by a finished [`RecordingBackend`]
pub type PageSink = Arc<Mutex<Vec<RecordingCanvas>>>;

/// Backend that keeps pages in memory and publishes them when finished
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pages: Vec<RecordingCanvas>,
    begun: usize,
    fail_on_page: Option<usize>,
    fail_on_finish: bool,
    sink: PageSink,
}

impl RecordingBackend {
    /// `begin_page` fails for the zero-based page `index`.
    pub fn failing_on_page(index: usize) -> Self {
        Self {
            fail_on_page: Some(index),
            ..Self::default()
        }
    }

    pub fn failing_on_finish() -> Self {
        Self {
            fail_on_finish: true,
            ..Self::default()
        }
    }

    pub fn sink(&self) -> PageSink {
        Arc::clone(&self.sink)
    }
}

impl DocumentBackend for RecordingBackend {
    type Page = RecordingCanvas;

    fn begin_page(&mut self, _width: f32, _height: f32) -> BadgeResult<RecordingCanvas> {
        let index = self.begun;
        self.begun += 1;
        if self.fail_on_page == Some(index) {
            return Err(BadgeError::PdfError(format!("page {} refused", index)));
        }
        Ok(RecordingCanvas::default())
    }

    fn end_page(&mut self, page: RecordingCanvas) -> BadgeResult<()> {
        self.pages.push(page);
        Ok(())
    }

    fn finish(self) -> BadgeResult<Vec<u8>> {
        if self.fail_on_finish {
            return Err(BadgeError::PdfError("finish refused".to_string()));
        }
        let summary = format!("{} pages", self.pages.len()).into_bytes();
        if let Ok(mut sink) = self.sink.lock() {
            *sink = self.pages;
        }
        Ok(summary)
    }
}
