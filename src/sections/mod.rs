//! Reusable layout blocks.
//!
//! Every section draws at the canvas cursor and leaves the cursor at the left
//! margin below what it drew. Styled spans go through `StyleGuard`, so each
//! section hands the canvas back in the style it received.

mod divider;
mod item_list;
mod stat_grid;
mod title;
mod two_column;
mod unit_row;

pub use divider::section_heading;
pub use item_list::{ListItem, item_list};
pub use stat_grid::{modifier_row, saving_throw_row, stat_grid};
pub use title::{fantasy_title, scifi_title};
pub use two_column::{CELL_BUDGET, truncate_cell, two_column_rows};
pub use unit_row::{DEFAULT_BASE_HP, base_hit_points, unit_hp_values, unit_row};

use battlesheet_render_core::{Border, Canvas};

/// Row height of body text lines.
pub const LINE_HEIGHT: f32 = 3.0;

/// Narrower-than-content width used for free text, leaving room for the
/// cell margin on the right.
pub fn body_width(canvas: &dyn Canvas) -> f32 {
    canvas.content_width() - 2.0
}

/// A wrapped paragraph starting at the left margin, clamped to the content
/// area. Blank text draws nothing.
pub fn paragraph(canvas: &mut dyn Canvas, width: f32, height: f32, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let width = width.min(canvas.content_width());
    let left = canvas.geometry().left_margin;
    canvas.set_x(left);
    canvas.multi_cell(width, height, text, Border::None);
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::Theme;
    use battlesheet_render_core::{Canvas, FlowCanvas, Recording, RecordingRenderer};
    use battlesheet_types::PageGeometry;

    /// A recording canvas with one open page in the theme's body style.
    pub fn canvas(theme: &Theme) -> FlowCanvas<RecordingRenderer> {
        let mut canvas = FlowCanvas::new(RecordingRenderer::new(), PageGeometry::a6());
        canvas.apply_style(&theme.body_style());
        canvas.add_page();
        canvas
    }

    pub fn finish(canvas: FlowCanvas<RecordingRenderer>) -> Recording {
        match canvas.finish() {
            Ok(recording) => recording,
            Err(e) => panic!("recording cannot fail: {}", e),
        }
    }
}
