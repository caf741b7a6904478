use crate::config::Theme;
use battlesheet_render_core::{Advance, Align, Border, Canvas, StyleGuard};

const SPACE_BEFORE: f32 = 2.0;
const LABEL_HEIGHT: f32 = 4.0;
/// Gap between the label and the start of the rule.
const LABEL_PADDING: f32 = 4.0;

/// Draws a section label in the heading style followed by a rule across the
/// rest of the content width. The canvas style is unchanged afterwards.
pub fn section_heading(canvas: &mut dyn Canvas, theme: &Theme, label: &str) {
    canvas.newline(Some(SPACE_BEFORE));

    let mut heading = StyleGuard::enter(canvas, theme.heading_style());
    let label_width = heading.string_width(label);
    heading.cell(label_width + LABEL_PADDING, LABEL_HEIGHT, label, Border::None, Align::Left, Advance::Right);

    let remaining = heading.content_width() - label_width - LABEL_PADDING;
    if remaining > 0.0 {
        let (x, y) = heading.cursor();
        let rule_y = y + LABEL_HEIGHT / 2.0;
        heading.line(x, rule_y, x + remaining, rule_y);
    }
    heading.newline(Some(LABEL_HEIGHT));
}
