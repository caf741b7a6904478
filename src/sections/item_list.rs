use super::{LINE_HEIGHT, body_width, paragraph};
use crate::config::Theme;
use battlesheet_render_core::{Canvas, StyleGuard};

const ITEM_GAP: f32 = 1.0;
const SECTION_GAP: f32 = 1.0;

/// One entry of a name-and-body list: a trait, an action, a weapon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    /// Drawn in bold on its own line; `None` for entries that are body only.
    pub name: Option<String>,
    pub lines: Vec<String>,
}

impl ListItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            lines: Vec::new(),
        }
    }

    /// An entry with no bold name, only a body line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            name: None,
            lines: vec![text.into()],
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Adds the line only when there is one.
    pub fn line_if(mut self, text: Option<String>) -> Self {
        self.lines.extend(text);
        self
    }
}

/// Draws each item's bold name followed by its body lines, all wrapped to
/// the body width at `size` points, with a small gap after every item and
/// one more after the list.
pub fn item_list(canvas: &mut dyn Canvas, theme: &Theme, size: f32, items: &[ListItem]) {
    let mut body = StyleGuard::font(canvas, theme.body(size));
    let width = body_width(&*body);

    for item in items {
        if let Some(name) = &item.name {
            let mut bold = StyleGuard::font(&mut *body, theme.bold(size));
            paragraph(&mut *bold, width, LINE_HEIGHT, name);
        }
        for line in &item.lines {
            paragraph(&mut *body, width, LINE_HEIGHT, line);
        }
        body.newline(Some(ITEM_GAP));
    }
    body.newline(Some(SECTION_GAP));
}
