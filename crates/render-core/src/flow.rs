use crate::canvas::{Advance, Align, Border, Canvas};
use crate::error::RenderError;
use crate::traits::{DocumentRenderer, Stroke, TextRun};
use crate::utils::pt_to_mm;
use battlesheet_layout::{fit_lines, text_width};
use battlesheet_types::{Color, FontSpec, PageGeometry};
use log::{debug, warn};

/// Share of the font size between a cell's vertical center and the text baseline.
const BASELINE_SHIFT: f32 = 0.3;

/// A `Canvas` that flows cells down the page and delegates drawing to a backend.
///
/// The canvas owns every piece of mutable drawing state: the cursor, the
/// current font and colors, and the page counter. Backends only ever see
/// absolute primitives.
pub struct FlowCanvas<R: DocumentRenderer> {
    renderer: R,
    geometry: PageGeometry,
    x: f32,
    y: f32,
    last_height: f32,
    font: FontSpec,
    text_color: Color,
    draw_color: Color,
    pages: usize,
}

impl<R: DocumentRenderer> FlowCanvas<R> {
    pub fn new(renderer: R, geometry: PageGeometry) -> Self {
        Self {
            renderer,
            x: geometry.left_margin,
            y: geometry.top_margin,
            geometry,
            last_height: 0.0,
            font: FontSpec::default(),
            text_color: Color::BLACK,
            draw_color: Color::BLACK,
            pages: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Hands the finished pages to the backend for serialization.
    pub fn finish(self) -> Result<R::Output, RenderError> {
        debug!("Finishing document with {} page(s)", self.pages);
        self.renderer.finish()
    }

    fn ensure_page(&mut self) {
        if self.pages == 0 {
            warn!("Drawing before any page was added; starting one");
            self.add_page();
        }
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            color: self.draw_color,
            width: self.geometry.line_width,
        }
    }

    fn right_edge(&self) -> f32 {
        self.geometry.width - self.geometry.right_margin
    }

    fn font_size_mm(&self) -> f32 {
        pt_to_mm(self.font.size)
    }
}

impl<R: DocumentRenderer> Canvas for FlowCanvas<R> {
    fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    fn add_page(&mut self) {
        self.pages += 1;
        self.renderer.begin_page(&self.geometry);
        self.x = self.geometry.left_margin;
        self.y = self.geometry.top_margin;
        self.last_height = 0.0;
        debug!("Started page {}", self.pages);
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn text_color(&self) -> Color {
        self.text_color
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn draw_color(&self) -> Color {
        self.draw_color
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn cell(&mut self, width: f32, height: f32, text: &str, border: Border, align: Align, advance: Advance) {
        self.ensure_page();

        if self.y + height > self.geometry.break_trigger() {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        let width = if width <= 0.0 { self.right_edge() - self.x } else { width };

        if border == Border::Frame {
            let stroke = self.stroke();
            self.renderer.stroke_rect(self.x, self.y, width, height, stroke);
        }

        if !text.is_empty() {
            let margin = self.geometry.cell_margin;
            let offset = match align {
                Align::Left => margin,
                Align::Right => width - margin - self.string_width(text),
                Align::Center => (width - self.string_width(text)) / 2.0,
            };
            let baseline = self.y + height / 2.0 + BASELINE_SHIFT * self.font_size_mm();
            self.renderer.draw_text(TextRun {
                x: self.x + offset,
                baseline,
                text,
                font: self.font,
                color: self.text_color,
            });
        }

        self.last_height = height;
        match advance {
            Advance::Right => self.x += width,
            Advance::NextLine => {
                self.x = self.geometry.left_margin;
                self.y += height;
            }
        }
    }

    fn multi_cell(&mut self, width: f32, height: f32, text: &str, border: Border) {
        if text.trim().is_empty() {
            return;
        }
        self.ensure_page();

        let width = if width <= 0.0 { self.right_edge() - self.x } else { width };
        let usable = width - 2.0 * self.geometry.cell_margin;
        let font = self.font;
        let lines = fit_lines(text, usable, |s| pt_to_mm(text_width(s, &font)));

        let start_x = self.x;
        for line in &lines {
            self.x = start_x;
            self.cell(width, height, line, border, Align::Left, Advance::NextLine);
        }
        self.x = self.geometry.left_margin;
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ensure_page();
        let stroke = self.stroke();
        self.renderer.stroke_line((x1, y1), (x2, y2), stroke);
    }

    fn string_width(&self, text: &str) -> f32 {
        pt_to_mm(text_width(text, &self.font))
    }

    fn cursor(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_cursor(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    fn newline(&mut self, height: Option<f32>) {
        self.x = self.geometry.left_margin;
        self.y += height.unwrap_or(self.last_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, RecordingRenderer};
    use battlesheet_types::{FontFamily, FontStyle};

    fn canvas() -> FlowCanvas<RecordingRenderer> {
        let mut canvas = FlowCanvas::new(RecordingRenderer::new(), PageGeometry::a6());
        canvas.add_page();
        canvas
    }

    #[test]
    fn next_line_returns_to_left_margin() {
        let mut canvas = canvas();
        canvas.cell(20.0, 4.0, "PV: 12", Border::None, Align::Left, Advance::Right);
        assert_eq!(canvas.cursor(), (30.0, 10.0));
        canvas.cell(20.0, 4.0, "CA: 15", Border::None, Align::Left, Advance::NextLine);
        assert_eq!(canvas.cursor(), (10.0, 14.0));
    }

    #[test]
    fn zero_width_extends_to_right_margin() {
        let mut canvas = canvas();
        canvas.set_x(30.0);
        canvas.cell(0.0, 5.0, "", Border::Frame, Align::Left, Advance::Right);
        assert_eq!(canvas.cursor().0, 95.0);
        let ops = canvas.finish().unwrap();
        match &ops.pages[0].ops[0] {
            DrawOp::Rect { x, width, .. } => {
                assert_eq!(*x, 30.0);
                assert_eq!(*width, 65.0);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn centers_text_in_cell() {
        let mut canvas = canvas();
        let width = canvas.string_width("Gobelin");
        canvas.cell(0.0, 6.0, "Gobelin", Border::None, Align::Center, Advance::NextLine);
        let recording = canvas.finish().unwrap();
        match &recording.pages[0].ops[0] {
            DrawOp::Text { x, baseline, .. } => {
                assert!((x - (10.0 + (85.0 - width) / 2.0)).abs() < 1e-4);
                let size_mm = pt_to_mm(8.0);
                assert!((baseline - (10.0 + 3.0 + 0.3 * size_mm)).abs() < 1e-4);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn overflow_starts_a_new_page_and_keeps_x() {
        let mut canvas = canvas();
        canvas.set_cursor(40.0, 140.0);
        canvas.cell(10.0, 4.0, "x", Border::None, Align::Left, Advance::Right);
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.cursor(), (50.0, 10.0));
    }

    #[test]
    fn multi_cell_wraps_by_measured_width() {
        let mut canvas = canvas();
        canvas.set_font(FontSpec::regular(FontFamily::Sans, 7.0));
        let text = "Le gobelin frappe avec sa lance rouillée puis se replie dans les ombres de la caverne.";
        canvas.multi_cell(40.0, 3.0, text, Border::None);
        let (x, y) = canvas.cursor();
        assert_eq!(x, 10.0);
        let recording = canvas.finish().unwrap();
        let lines = recording.texts(0);
        assert!(lines.len() > 1);
        assert_eq!(y, 10.0 + 3.0 * lines.len() as f32);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn multi_cell_skips_blank_text() {
        let mut canvas = canvas();
        canvas.multi_cell(0.0, 3.0, "   ", Border::None);
        assert_eq!(canvas.cursor(), (10.0, 10.0));
        assert!(canvas.finish().unwrap().pages[0].ops.is_empty());
    }

    #[test]
    fn newline_defaults_to_last_cell_height() {
        let mut canvas = canvas();
        canvas.cell(10.0, 3.5, "7", Border::Frame, Align::Center, Advance::Right);
        canvas.newline(None);
        assert_eq!(canvas.cursor(), (10.0, 13.5));
        canvas.newline(Some(2.0));
        assert_eq!(canvas.cursor(), (10.0, 15.5));
    }

    #[test]
    fn drawing_without_a_page_opens_one() {
        let mut canvas = FlowCanvas::new(RecordingRenderer::new(), PageGeometry::a6());
        canvas.line(10.0, 20.0, 95.0, 20.0);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn text_carries_current_font_and_color() {
        let mut canvas = canvas();
        let bold = FontSpec::bold(FontFamily::Sans, 7.0);
        canvas.set_font(bold);
        canvas.set_text_color(Color::rgb(0, 0, 139));
        canvas.cell(20.0, 3.0, "TRAITS", Border::None, Align::Left, Advance::Right);
        let recording = canvas.finish().unwrap();
        match &recording.pages[0].ops[0] {
            DrawOp::Text { font, color, .. } => {
                assert_eq!(font.style, FontStyle::Bold);
                assert_eq!(*color, Color::rgb(0, 0, 139));
            }
            other => panic!("unexpected op {:?}", other),
        }
    }
}
