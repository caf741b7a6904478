use battlesheet_layout::truncate_chars;
use battlesheet_render_core::{Advance, Align, Border, Canvas};

/// Longest text a fixed two-column cell may hold before it is cut.
pub const CELL_BUDGET: usize = 25;

/// Cuts `text` to the two-column cell budget, ending it with an ellipsis.
pub fn truncate_cell(text: &str) -> String {
    truncate_chars(text, CELL_BUDGET)
}

/// Draws `rows` as left/right cell pairs of `column_width` each.
///
/// Text is drawn as given; callers decide whether it needs truncating.
pub fn two_column_rows(canvas: &mut dyn Canvas, column_width: f32, line_height: f32, rows: &[(String, String)]) {
    for (left, right) in rows {
        canvas.cell(column_width, line_height, left, Border::None, Align::Left, Advance::Right);
        canvas.cell(column_width, line_height, right, Border::None, Align::Left, Advance::NextLine);
    }
}
