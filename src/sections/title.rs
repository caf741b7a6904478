use crate::config::Theme;
use battlesheet_layout::{parse_title, wrap_text};
use battlesheet_render_core::{Advance, Align, Border, Canvas, StyleGuard, TextStyle};

const NAME_HEIGHT: f32 = 6.0;
const TYPE_HEIGHT: f32 = 4.0;
const TYPE_SIZE: f32 = 7.0;
const SUBTITLE_HEIGHT: f32 = 4.0;
const SUBTITLE_CHARS: usize = 40;
const ROLE_HEIGHT: f32 = 3.0;
const ROLE_SIZE: f32 = 6.0;
const ROLE_CHARS: usize = 55;
/// Lines kept from a long subtitle or role.
const MAX_LINES: usize = 2;
/// Distance between each end of the accent rule and the margins.
const RULE_INSET: f32 = 20.0;

fn centered(canvas: &mut dyn Canvas, height: f32, text: &str) {
    canvas.cell(0.0, height, text, Border::None, Align::Center, Advance::NextLine);
}

/// Centered creature name in the fantasy title style, with an optional
/// "Type : …" line beneath it.
pub fn fantasy_title(canvas: &mut dyn Canvas, theme: &Theme, name: &str, creature_type: Option<&str>) {
    {
        let mut title = StyleGuard::enter(canvas, TextStyle::new(theme.fantasy_title, theme.title_color));
        centered(&mut *title, NAME_HEIGHT, name);
    }

    if let Some(creature_type) = creature_type.filter(|t| !t.is_empty()) {
        let mut line = StyleGuard::font(canvas, theme.body(TYPE_SIZE));
        centered(&mut *line, TYPE_HEIGHT, &format!("Type : {}", creature_type));
        line.newline(Some(2.0));
    }
}

/// Sci-fi title block: the name in accent color over a short accent rule,
/// then the subtitle and role, each wrapped to at most two centered lines.
///
/// The name and subtitle come from splitting `full_title` on its first
/// dash separator.
pub fn scifi_title(canvas: &mut dyn Canvas, theme: &Theme, full_title: &str, role: Option<&str>) {
    let (name, subtitle) = parse_title(full_title);

    {
        let accent = TextStyle::new(theme.scifi_title, theme.accent_color).with_draw_color(theme.accent_color);
        let mut title = StyleGuard::enter(canvas, accent);
        centered(&mut *title, NAME_HEIGHT, &name);

        let geometry = *title.geometry();
        let rule_y = title.cursor().1 - 1.0;
        title.line(
            geometry.left_margin + RULE_INSET,
            rule_y,
            geometry.width - geometry.right_margin - RULE_INSET,
            rule_y,
        );
    }
    canvas.newline(Some(2.0));

    if !subtitle.is_empty() {
        let mut sub = StyleGuard::enter(canvas, TextStyle::new(theme.scifi_subtitle, theme.subtitle_color));
        for line in wrap_text(&subtitle, SUBTITLE_CHARS, MAX_LINES) {
            if !line.trim().is_empty() {
                centered(&mut *sub, SUBTITLE_HEIGHT, &line);
            }
        }
    }

    if let Some(role) = role.filter(|r| !r.is_empty()) {
        let mut role_style = StyleGuard::enter(canvas, TextStyle::new(theme.body(ROLE_SIZE), theme.role_color));
        role_style.newline(Some(1.0));
        for line in wrap_text(role, ROLE_CHARS, MAX_LINES) {
            if !line.trim().is_empty() {
                centered(&mut *role_style, ROLE_HEIGHT, &line);
            }
        }
    }

    canvas.newline(Some(2.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing;
    use battlesheet_render_core::DrawOp;
    use battlesheet_types::Color;

    #[test]
    fn fantasy_title_with_type_line() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        fantasy_title(&mut canvas, &theme, "Gobelin", Some("Humanoïde (x4)"));
        assert_eq!(canvas.cursor(), (10.0, 10.0 + NAME_HEIGHT + TYPE_HEIGHT + 2.0));
        assert_eq!(canvas.style(), theme.body_style());

        let recording = testing::finish(canvas);
        assert_eq!(recording.texts(0), ["Gobelin", "Type : Humanoïde (x4)"]);
        match &recording.pages[0].ops[0] {
            DrawOp::Text { color, font, .. } => {
                assert_eq!(*color, Color::rgb(200, 0, 0));
                assert_eq!(*font, theme.fantasy_title);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn fantasy_title_without_type() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        fantasy_title(&mut canvas, &theme, "Liche (Niveau 12)", None);
        assert_eq!(canvas.cursor(), (10.0, 10.0 + NAME_HEIGHT));
    }

    #[test]
    fn scifi_title_splits_on_em_dash() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        scifi_title(&mut canvas, &theme, "Void Strider — The Last Hunter", None);
        assert_eq!(canvas.style(), theme.body_style());

        let recording = testing::finish(canvas);
        assert_eq!(recording.texts(0), ["Void Strider", "The Last Hunter"]);
        let rule = recording.pages[0].lines().next().cloned();
        match rule {
            Some(DrawOp::Line { from, to, stroke }) => {
                assert_eq!(from, (30.0, 15.0));
                assert_eq!(to, (75.0, 15.0));
                assert_eq!(stroke.color, Color::rgb(0, 150, 200));
            }
            other => panic!("expected accent rule, got {:?}", other),
        }
    }

    #[test]
    fn long_role_keeps_two_lines() {
        let theme = Theme::default();
        let mut canvas = testing::canvas(&theme);
        let role = "Chasseur solitaire qui traque les équipages perdus entre les stations abandonnées de la bordure extérieure du secteur";
        scifi_title(&mut canvas, &theme, "Rôdeur", Some(role));
        let recording = testing::finish(canvas);
        let texts = recording.texts(0);
        assert_eq!(texts.len(), 3);
        assert!(texts[1..].iter().all(|line| line.chars().count() <= ROLE_CHARS));
    }
}
