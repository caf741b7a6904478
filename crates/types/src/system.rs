use crate::creature::{CofCreature, DndCreature, SwnCreature};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The game systems a battlesheet can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameSystem {
    Dnd,
    Swn,
    CofMini,
    Timothee,
}

impl GameSystem {
    pub const ALL: [GameSystem; 4] = [
        GameSystem::Dnd,
        GameSystem::Swn,
        GameSystem::CofMini,
        GameSystem::Timothee,
    ];

    /// Human-readable name used in logs and summaries.
    pub fn label(self) -> &'static str {
        match self {
            GameSystem::Dnd => "D&D",
            GameSystem::Swn => "SWN",
            GameSystem::CofMini => "COF Mini",
            GameSystem::Timothee => "Timothée",
        }
    }

    /// Conventional directory holding this system's creature files.
    pub fn default_input_dir(self) -> &'static str {
        match self {
            GameSystem::Dnd => "dnd_creatures",
            GameSystem::Swn => "swn_creatures",
            GameSystem::CofMini => "cofmini_creatures",
            GameSystem::Timothee => "timothee_creatures",
        }
    }

    pub fn output_file_name(self) -> &'static str {
        match self {
            GameSystem::Dnd => "DnD_Creatures.pdf",
            GameSystem::Swn => "SWN_Creatures.pdf",
            GameSystem::CofMini => "COFMini_Creatures.pdf",
            GameSystem::Timothee => "Timothee_Creatures.pdf",
        }
    }

    /// Converts a raw JSON document into this system's record variant.
    pub fn parse_record(self, value: Value) -> Result<CreatureRecord, RecordError> {
        let wrap = |source| RecordError { system: self, source };
        match self {
            GameSystem::Dnd => serde_json::from_value(value).map(CreatureRecord::Dnd).map_err(wrap),
            GameSystem::Swn => serde_json::from_value(value).map(CreatureRecord::Swn).map_err(wrap),
            GameSystem::CofMini | GameSystem::Timothee => {
                serde_json::from_value(value).map(CreatureRecord::Cof).map_err(wrap)
            }
        }
    }
}

impl fmt::Display for GameSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
#[error("not a valid {system} creature: {source}")]
pub struct RecordError {
    pub system: GameSystem,
    #[source]
    pub source: serde_json::Error,
}

/// A creature record tagged with its schema variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatureRecord {
    Dnd(DndCreature),
    Swn(SwnCreature),
    /// Shared by COF Mini and Timothée.
    Cof(CofCreature),
}

impl CreatureRecord {
    /// Whether this record's schema is the one `system` renders.
    pub fn fits(&self, system: GameSystem) -> bool {
        matches!(
            (self, system),
            (CreatureRecord::Dnd(_), GameSystem::Dnd)
                | (CreatureRecord::Swn(_), GameSystem::Swn)
                | (CreatureRecord::Cof(_), GameSystem::CofMini | GameSystem::Timothee)
        )
    }

    /// The name a listing would show, if the record has one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            CreatureRecord::Dnd(c) => c.name.as_deref(),
            CreatureRecord::Swn(c) => c.title.as_deref(),
            CreatureRecord::Cof(c) => c.name.as_deref(),
        }
    }
}
