pub mod color;
pub mod creature;
pub mod font;
pub mod geometry;
pub mod system;
pub mod value;

pub use color::Color;
pub use creature::{
    CofAttack, CofCreature, CofDefenses, CofSpecialAbility, DndAction, DndCreature, DndSenses,
    DndTrait, SwnCreature, SwnStats, SwnWeapon,
};
pub use font::{FontFamily, FontSpec, FontStyle};
pub use geometry::PageGeometry;
pub use system::{CreatureRecord, GameSystem, RecordError};
pub use value::FieldValue;
