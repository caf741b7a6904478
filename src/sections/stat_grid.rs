use battlesheet_render_core::{Advance, Align, Border, Canvas, StyleGuard};
use battlesheet_types::FieldValue;
use indexmap::IndexMap;

use crate::config::Theme;

const ROW_HEIGHT: f32 = 3.5;
const NAME_SIZE: f32 = 7.0;
const VALUE_SIZE: f32 = 6.0;
/// Shown in place of a modifier the record does not give.
const MISSING_MODIFIER: &str = "—";

fn is_blank(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => s.trim().is_empty(),
        FieldValue::List(items) => items.is_empty(),
        FieldValue::Other(v) => v.is_null(),
        _ => false,
    }
}

/// Signed modifier per stat, in stat order.
pub fn modifier_row(stats: &IndexMap<String, FieldValue>, modifiers: &IndexMap<String, FieldValue>) -> Vec<String> {
    stats
        .keys()
        .map(|name| {
            modifiers
                .get(name)
                .map_or_else(|| MISSING_MODIFIER.to_string(), FieldValue::signed)
        })
        .collect()
}

/// The saving-throw row, when at least one stat has a saving throw that is
/// set and differs from its plain modifier.
///
/// Stats whose saving throw is absent, blank or equal to the modifier get an
/// empty cell. A missing modifier compares as `0`.
pub fn saving_throw_row(
    stats: &IndexMap<String, FieldValue>,
    modifiers: &IndexMap<String, FieldValue>,
    saving_throws: &IndexMap<String, FieldValue>,
) -> Option<Vec<String>> {
    let zero = FieldValue::Int(0);
    let row: Vec<Option<String>> = stats
        .keys()
        .map(|name| {
            let modifier = modifiers.get(name).unwrap_or(&zero);
            saving_throws
                .get(name)
                .filter(|save| !is_blank(save) && !save.same_value(modifier))
                .map(FieldValue::signed)
        })
        .collect();

    if row.iter().all(Option::is_none) {
        return None;
    }
    Some(row.into_iter().map(Option::unwrap_or_default).collect())
}

fn grid_row(canvas: &mut dyn Canvas, column_width: f32, cells: &[String]) {
    for text in cells {
        canvas.cell(column_width, ROW_HEIGHT, text, Border::Frame, Align::Center, Advance::Right);
    }
    canvas.newline(None);
}

/// Draws one framed column per stat: names, values, signed modifiers and,
/// when any stat qualifies, saving throws. Columns split the content width
/// evenly. Nothing is drawn for an empty stat block.
pub fn stat_grid(
    canvas: &mut dyn Canvas,
    theme: &Theme,
    stats: &IndexMap<String, FieldValue>,
    modifiers: &IndexMap<String, FieldValue>,
    saving_throws: &IndexMap<String, FieldValue>,
) {
    if stats.is_empty() {
        return;
    }
    let column_width = canvas.content_width() / stats.len() as f32;

    let names: Vec<String> = stats.keys().cloned().collect();
    grid_row(&mut *StyleGuard::font(canvas, theme.body(NAME_SIZE)), column_width, &names);

    let mut small = StyleGuard::font(canvas, theme.body(VALUE_SIZE));
    let values: Vec<String> = stats.values().map(FieldValue::to_string).collect();
    grid_row(&mut *small, column_width, &values);
    grid_row(&mut *small, column_width, &modifier_row(stats, modifiers));
    if let Some(saves) = saving_throw_row(stats, modifiers, saving_throws) {
        grid_row(&mut *small, column_width, &saves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;

    fn map(entries: &[(&str, FieldValue)]) -> IndexMap<String, FieldValue> {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn abilities() -> IndexMap<String, FieldValue> {
        map(&[
            ("FOR", FieldValue::Int(16)),
            ("DEX", FieldValue::Int(12)),
            ("CON", FieldValue::Int(14)),
            ("INT", FieldValue::Int(8)),
            ("SAG", FieldValue::Int(10)),
            ("CHA", FieldValue::Int(6)),
        ])
    }

    fn modifiers() -> IndexMap<String, FieldValue> {
        map(&[
            ("FOR", FieldValue::Int(3)),
            ("DEX", FieldValue::Int(1)),
            ("CON", FieldValue::Int(2)),
            ("INT", FieldValue::Int(-1)),
            ("SAG", FieldValue::Int(0)),
            ("CHA", FieldValue::Int(-2)),
        ])
    }

    #[test]
    fn modifiers_are_signed() {
        let row = modifier_row(&abilities(), &modifiers());
        assert_eq!(row, ["+3", "+1", "+2", "-1", "+0", "-2"]);
    }

    #[test]
    fn missing_modifier_shows_dash() {
        let row = modifier_row(&abilities(), &map(&[("FOR", FieldValue::Int(3))]));
        assert_eq!(row[0], "+3");
        assert_eq!(row[1], "—");
    }

    #[test]
    fn no_save_row_when_saves_match_modifiers() {
        let saves = map(&[("FOR", FieldValue::Int(3)), ("DEX", FieldValue::text(""))]);
        assert_eq!(saving_throw_row(&abilities(), &modifiers(), &saves), None);
        assert_eq!(saving_throw_row(&abilities(), &modifiers(), &IndexMap::new()), None);
    }

    #[test]
    fn save_row_blanks_non_qualifying_columns() {
        let saves = map(&[("CON", FieldValue::Int(5)), ("SAG", FieldValue::Int(0)), ("INT", FieldValue::text("+2"))]);
        let row = saving_throw_row(&abilities(), &modifiers(), &saves).unwrap();
        assert_eq!(row, ["", "", "+5", "+2", "", ""]);
    }

    #[test]
    fn missing_modifier_compares_as_zero() {
        let stats = map(&[("FOR", FieldValue::Int(10))]);
        let saves = map(&[("FOR", FieldValue::Int(0))]);
        assert_eq!(saving_throw_row(&stats, &IndexMap::new(), &saves), None);
    }

    #[test]
    fn every_row_has_one_cell_per_stat() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        let saves = map(&[("DEX", FieldValue::Int(4))]);
        stat_grid(&mut canvas, &theme, &abilities(), &modifiers(), &saves);
        assert_eq!(canvas.cursor(), (10.0, 10.0 + 4.0 * ROW_HEIGHT));
        assert_eq!(canvas.style(), theme.body_style());

        let recording = testing::finish(canvas);
        assert_eq!(recording.pages[0].rects().count(), 6 * 4);
        assert_eq!(&recording.texts(0)[..6], ["FOR", "DEX", "CON", "INT", "SAG", "CHA"]);
    }

    #[test]
    fn three_rows_without_saves() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        stat_grid(&mut canvas, &theme, &abilities(), &modifiers(), &IndexMap::new());
        let recording = testing::finish(canvas);
        assert_eq!(recording.pages[0].rects().count(), 6 * 3);
    }

    #[test]
    fn empty_stats_draw_nothing() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        stat_grid(&mut canvas, &theme, &IndexMap::new(), &modifiers(), &IndexMap::new());
        assert!(testing::finish(canvas).pages[0].ops.is_empty());
    }
}
