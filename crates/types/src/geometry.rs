use serde::{Deserialize, Serialize};

/// Physical page layout in millimetres.
///
/// The content area is the page width minus the left and right margins.
/// `break_margin` is the distance from the bottom edge at which the canvas
/// starts a new page on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub right_margin: f32,
    pub break_margin: f32,
    /// Horizontal padding applied inside cells before text.
    pub cell_margin: f32,
    /// Stroke width for borders and rules.
    pub line_width: f32,
}

impl PageGeometry {
    pub const A6_WIDTH_MM: f32 = 105.0;
    pub const A6_HEIGHT_MM: f32 = 148.0;

    pub fn a6() -> Self {
        Self {
            width: Self::A6_WIDTH_MM,
            height: Self::A6_HEIGHT_MM,
            left_margin: 10.0,
            top_margin: 10.0,
            right_margin: 10.0,
            break_margin: 5.0,
            cell_margin: 1.0,
            line_width: 0.2,
        }
    }

    /// Horizontal budget for all layout.
    pub fn content_width(&self) -> f32 {
        self.width - self.left_margin - self.right_margin
    }

    /// The y coordinate past which content no longer fits on the page.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a6()
    }
}
