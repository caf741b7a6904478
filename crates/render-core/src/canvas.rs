use crate::style::TextStyle;
use battlesheet_types::{Color, FontSpec, PageGeometry};

/// Whether a cell strokes its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the cursor goes after a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advance {
    /// Continue on the same row, just right of the cell.
    #[default]
    Right,
    /// Return to the left margin below the cell.
    NextLine,
}

/// A cursor-based drawing surface measured in millimetres.
///
/// Section renderers only ever talk to a `&mut dyn Canvas`. Page overflow
/// is handled by the implementation: a cell that would cross the page-break
/// trigger starts a new page on its own.
pub trait Canvas {
    fn geometry(&self) -> &PageGeometry;

    /// Starts a new page and moves the cursor to the top-left margin.
    fn add_page(&mut self);

    fn page_count(&self) -> usize;

    fn font(&self) -> FontSpec;

    fn set_font(&mut self, font: FontSpec);

    fn text_color(&self) -> Color;

    fn set_text_color(&mut self, color: Color);

    fn draw_color(&self) -> Color;

    fn set_draw_color(&mut self, color: Color);

    /// Draws a single-line cell. A `width` of zero extends to the right margin.
    fn cell(&mut self, width: f32, height: f32, text: &str, border: Border, align: Align, advance: Advance);

    /// Draws a paragraph wrapped to `width`, one `height`-tall line per row.
    /// Leaves the cursor at the left margin below the last line.
    fn multi_cell(&mut self, width: f32, height: f32, text: &str, border: Border);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Width of `text` in the current font, in millimetres.
    fn string_width(&self, text: &str) -> f32;

    fn cursor(&self) -> (f32, f32);

    fn set_cursor(&mut self, x: f32, y: f32);

    fn set_x(&mut self, x: f32);

    /// Moves to the left margin, `height` lower (or by the last cell height).
    fn newline(&mut self, height: Option<f32>);

    fn content_width(&self) -> f32 {
        self.geometry().content_width()
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            font: self.font(),
            text_color: self.text_color(),
            draw_color: self.draw_color(),
        }
    }

    fn apply_style(&mut self, style: &TextStyle) {
        self.set_font(style.font);
        self.set_text_color(style.text_color);
        self.set_draw_color(style.draw_color);
    }
}
