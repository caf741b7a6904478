use crate::error::RenderError;
use battlesheet_types::{Color, FontSpec, PageGeometry};

/// A run of text positioned on its baseline, in millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    pub x: f32,
    pub baseline: f32,
    pub text: &'a str,
    pub font: FontSpec,
    pub color: Color,
}

/// Stroke parameters for rules and cell borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Line width in millimetres.
    pub width: f32,
}

/// A trait for document backends, abstracting the page-drawing primitives.
///
/// Coordinates are absolute millimetres with a top-left origin; backends
/// convert to their native space. Drawing never fails; errors surface from
/// `finish` when the document is serialized.
pub trait DocumentRenderer {
    type Output;

    fn begin_page(&mut self, geometry: &PageGeometry);

    fn draw_text(&mut self, run: TextRun<'_>);

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: Stroke);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), stroke: Stroke);

    fn finish(self) -> Result<Self::Output, RenderError>;
}
