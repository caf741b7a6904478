//! Page geometry and visual theme for the cards.
//!
//! The defaults reproduce the classic look: A6 pages, red fantasy titles,
//! dark blue section headings and cyan sci-fi titles. Any subset can be
//! overridden from a JSON file; missing keys keep their defaults.

use crate::error::SheetError;
use battlesheet_render_core::TextStyle;
use battlesheet_types::{Color, FontFamily, FontSpec, FontStyle, PageGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub page: PageGeometry,
    pub theme: Theme,
}

impl SheetConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Self::from_json(&source).map_err(|e| SheetError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Fonts and colors shared by every section renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Family for body text, headings and tables.
    pub body_family: FontFamily,
    pub body_size: f32,
    pub heading_size: f32,
    /// Creature names on D&D and COF cards.
    pub fantasy_title: FontSpec,
    /// Creature names on SWN cards.
    pub scifi_title: FontSpec,
    /// SWN subtitles.
    pub scifi_subtitle: FontSpec,
    pub body_color: Color,
    pub title_color: Color,
    pub heading_color: Color,
    pub rule_color: Color,
    pub accent_color: Color,
    pub subtitle_color: Color,
    pub role_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            body_family: FontFamily::Sans,
            body_size: 8.0,
            heading_size: 10.0,
            fantasy_title: FontSpec::regular(FontFamily::Serif, 12.0),
            scifi_title: FontSpec::bold(FontFamily::Mono, 12.0),
            scifi_subtitle: FontSpec::regular(FontFamily::Mono, 7.0),
            body_color: Color::BLACK,
            title_color: Color::rgb(200, 0, 0),
            heading_color: Color::rgb(0, 0, 139),
            rule_color: Color::gray(100),
            accent_color: Color::rgb(0, 150, 200),
            subtitle_color: Color::gray(60),
            role_color: Color::gray(100),
        }
    }
}

impl Theme {
    /// Regular body font at `size` points.
    pub fn body(&self, size: f32) -> FontSpec {
        FontSpec::new(self.body_family, FontStyle::Regular, size)
    }

    pub fn bold(&self, size: f32) -> FontSpec {
        FontSpec::new(self.body_family, FontStyle::Bold, size)
    }

    /// The style every card starts from and returns to.
    pub fn body_style(&self) -> TextStyle {
        TextStyle::new(self.body(self.body_size), self.body_color)
    }

    pub fn heading_style(&self) -> TextStyle {
        TextStyle::new(self.body(self.heading_size), self.heading_color).with_draw_color(self.rule_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SheetConfig::from_json(r##"{"theme": {"title_color": "#006400"}}"##).unwrap();
        assert_eq!(config.theme.title_color, Color::rgb(0, 100, 0));
        assert_eq!(config.theme.heading_color, Color::rgb(0, 0, 139));
        assert_eq!(config.page, PageGeometry::a6());
    }

    #[test]
    fn page_overrides() {
        let config = SheetConfig::from_json(r#"{"page": {"width": 148.0, "height": 210.0}}"#).unwrap();
        assert_eq!(config.page.width, 148.0);
        assert_eq!(config.page.left_margin, 10.0);
    }

    #[test]
    fn heading_style_uses_rule_color_for_strokes() {
        let theme = Theme::default();
        let style = theme.heading_style();
        assert_eq!(style.font.size, 10.0);
        assert_eq!(style.draw_color, Color::gray(100));
        assert_eq!(theme.body_style().font, FontSpec::regular(FontFamily::Sans, 8.0));
    }

    #[test]
    fn reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"page": {"width": "wide"}}"#).unwrap();
        let err = SheetConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, SheetError::Config { .. }));
    }
}
