use serde::{Deserialize, Serialize};

/// Logical font families. Backends map these onto concrete faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
}

/// A fully resolved font selection: family, style and size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    #[serde(default)]
    pub style: FontStyle,
    pub size: f32,
}

impl FontSpec {
    pub const fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self { family, style, size }
    }

    pub const fn regular(family: FontFamily, size: f32) -> Self {
        Self::new(family, FontStyle::Regular, size)
    }

    pub const fn bold(family: FontFamily, size: f32) -> Self {
        Self::new(family, FontStyle::Bold, size)
    }

    /// Same family and size, different weight.
    pub const fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }

    /// Same family and weight, different size.
    pub const fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::regular(FontFamily::Sans, 8.0)
    }
}
