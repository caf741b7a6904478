//! Battlesheet generation for tabletop creatures.
//!
//! Creature records are loaded per game system, then each record is drawn as
//! one A6 card by that system's [`Plan`](plans::Plan). The resulting document
//! is written as a PDF through [`SheetComposer`].

pub mod composer;
pub mod config;
pub mod error;
pub mod plans;
pub mod sections;

pub use composer::{
    SheetComposer, render_cofmini_sheets, render_dnd_sheets, render_swn_sheets,
    render_timothee_sheets,
};
pub use config::{SheetConfig, Theme};
pub use error::SheetError;
pub use plans::{COF_MINI_PLAN, DND_PLAN, Plan, SWN_PLAN, Section, TIMOTHEE_PLAN};

pub use battlesheet_types::{CreatureRecord, GameSystem};
