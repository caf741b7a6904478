//! Creature record schemas, one per game-system family.
//!
//! Every field is optional: renderers substitute their own placeholders, so a
//! sparse or hand-edited file still produces a page.

mod cof;
mod dnd;
mod swn;

pub use cof::{CofAttack, CofCreature, CofDefenses, CofSpecialAbility};
pub use dnd::{DndAction, DndCreature, DndSenses, DndTrait};
pub use swn::{SwnCreature, SwnStats, SwnWeapon};
