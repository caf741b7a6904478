use crate::config::Theme;
use battlesheet_layout::first_number;
use battlesheet_render_core::{Advance, Align, Border, Canvas, StyleGuard};
use battlesheet_types::FieldValue;
use log::warn;

/// Base hit points when the record gives no number to work from.
pub const DEFAULT_BASE_HP: i64 = 20;

const SPACE_BEFORE: f32 = 3.0;
const SPACE_AFTER: f32 = 1.0;
const ROW_HEIGHT: f32 = 4.0;
const FONT_SIZE: f32 = 6.0;
/// Horizontal inset of the row on each side of the content area.
const INSET: f32 = 2.0;
/// Most cells the row can hold before they stop being legible.
pub const MAX_UNIT_CELLS: i64 = 20;

/// The first run of digits in the hit-points field, or `DEFAULT_BASE_HP`.
pub fn base_hit_points(hit_points: Option<&FieldValue>) -> i64 {
    hit_points
        .and_then(|hp| first_number(&hp.to_string()))
        .and_then(|n| i64::try_from(n).ok())
        .unwrap_or(DEFAULT_BASE_HP)
}

/// Remaining hit points with `units` down to 1 members left, rounded down.
///
/// Groups larger than `MAX_UNIT_CELLS` get no row.
pub fn unit_hp_values(base_hp: i64, units: i64) -> Vec<i64> {
    if units < 1 {
        return Vec::new();
    }
    if units > MAX_UNIT_CELLS {
        warn!("Skipping unit row: {} units exceed the {} cells a card can hold", units, MAX_UNIT_CELLS);
        return Vec::new();
    }
    (1..=units)
        .rev()
        .map(|alive| (i128::from(base_hp) * i128::from(alive) / i128::from(units)) as i64)
        .collect()
}

/// Draws one framed, centered cell per value across the inset content width.
pub fn unit_row(canvas: &mut dyn Canvas, theme: &Theme, values: &[i64]) {
    if values.is_empty() {
        return;
    }
    canvas.newline(Some(SPACE_BEFORE));

    let mut row = StyleGuard::font(canvas, theme.body(FONT_SIZE));
    let column_width = (row.content_width() - 2.0 * INSET) / values.len() as f32;
    let left = row.geometry().left_margin;
    row.set_x(left + INSET);
    for value in values {
        row.cell(column_width, ROW_HEIGHT, &value.to_string(), Border::Frame, Align::Center, Advance::Right);
    }
    row.newline(None);
    row.newline(Some(SPACE_AFTER));
}
