use crate::canvas::Canvas;
use battlesheet_types::{Color, FontSpec};
use std::ops::{Deref, DerefMut};

/// The style state a canvas carries between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub text_color: Color,
    pub draw_color: Color,
}

impl TextStyle {
    pub const fn new(font: FontSpec, text_color: Color) -> Self {
        Self {
            font,
            text_color,
            draw_color: Color::BLACK,
        }
    }

    pub const fn with_draw_color(self, draw_color: Color) -> Self {
        Self { draw_color, ..self }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(FontSpec::default(), Color::BLACK)
    }
}

/// Applies a style for the lifetime of the guard.
///
/// The canvas style in effect when the guard was created is restored when it
/// drops, so a bold name or a colored heading cannot leak into whatever is
/// drawn next.
pub struct StyleGuard<'a> {
    canvas: &'a mut dyn Canvas,
    saved: TextStyle,
}

impl<'a> StyleGuard<'a> {
    pub fn enter(canvas: &'a mut dyn Canvas, style: TextStyle) -> Self {
        let saved = canvas.style();
        canvas.apply_style(&style);
        Self { canvas, saved }
    }

    /// Only swaps the font; colors stay as they are.
    pub fn font(canvas: &'a mut dyn Canvas, font: FontSpec) -> Self {
        let style = TextStyle { font, ..canvas.style() };
        Self::enter(canvas, style)
    }
}

impl<'a> Deref for StyleGuard<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for StyleGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        self.canvas.apply_style(&self.saved);
    }
}
