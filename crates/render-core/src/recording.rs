use crate::error::RenderError;
use crate::traits::{DocumentRenderer, Stroke, TextRun};
use battlesheet_types::{Color, FontSpec, PageGeometry};

/// One drawing primitive as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        baseline: f32,
        text: String,
        font: FontSpec,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: Stroke,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }
}

/// Everything a `RecordingRenderer` captured, page by page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub pages: Vec<RecordedPage>,
}

impl Recording {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text runs drawn on one page, in drawing order.
    pub fn texts(&self, page: usize) -> Vec<&str> {
        self.pages.get(page).map(RecordedPage::texts).unwrap_or_default()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages
            .iter()
            .any(|page| page.texts().iter().any(|text| text.contains(needle)))
    }
}

/// A backend that keeps every primitive in memory instead of producing bytes.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    recording: Recording,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.recording.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

impl DocumentRenderer for RecordingRenderer {
    type Output = Recording;

    fn begin_page(&mut self, geometry: &PageGeometry) {
        self.recording.pages.push(RecordedPage {
            width: geometry.width,
            height: geometry.height,
            ops: Vec::new(),
        });
    }

    fn draw_text(&mut self, run: TextRun<'_>) {
        self.push(DrawOp::Text {
            x: run.x,
            baseline: run.baseline,
            text: run.text.to_string(),
            font: run.font,
            color: run.color,
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: Stroke) {
        self.push(DrawOp::Rect { x, y, width, height, stroke });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke) {
        self.push(DrawOp::Line { from, to, stroke });
    }

    fn finish(self) -> Result<Recording, RenderError> {
        Ok(self.recording)
    }
}
