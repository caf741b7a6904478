//! Per-system page plans.
//!
//! A plan is a fixed, ordered list of section renderers bound to one record
//! schema. Rendering a record always starts a fresh page, then runs every
//! section in order; overflow onto a following page is left to the canvas.

mod cof;
mod dnd;
mod swn;

pub use cof::{COF_MINI_PLAN, TIMOTHEE_PLAN};
pub use dnd::DND_PLAN;
pub use swn::SWN_PLAN;

use crate::config::Theme;
use battlesheet_render_core::Canvas;
use battlesheet_types::GameSystem;
use log::debug;

/// One step of a plan.
pub type Section<R> = fn(&mut dyn Canvas, &Theme, &R);

pub struct Plan<R: 'static> {
    pub system: GameSystem,
    pub sections: &'static [Section<R>],
}

impl<R: 'static> Plan<R> {
    /// Draws `record` on a new page.
    pub fn render(&self, canvas: &mut dyn Canvas, theme: &Theme, record: &R) {
        canvas.add_page();
        canvas.apply_style(&theme.body_style());
        for section in self.sections {
            section(canvas, theme, record);
        }
        debug!("Rendered {} card ending on page {}", self.system, canvas.page_count());
    }
}
