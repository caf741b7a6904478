use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndCreature {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub creature_type: Option<String>,
    /// Size of a group of identical creatures sharing one card.
    #[serde(alias = "unite")]
    pub units: Option<i64>,
    pub hit_points: Option<FieldValue>,
    pub speed: Option<FieldValue>,
    pub armor_class: Option<FieldValue>,
    pub senses: DndSenses,
    pub damage_immunities: Option<FieldValue>,
    pub condition_immunities: Option<FieldValue>,
    pub vulnerabilities: Option<FieldValue>,
    /// Ability scores in display order.
    pub stats: IndexMap<String, FieldValue>,
    pub modifiers: IndexMap<String, FieldValue>,
    pub saving_throws: IndexMap<String, FieldValue>,
    pub traits: Vec<DndTrait>,
    pub actions: Vec<DndAction>,
}

impl DndCreature {
    /// Declared unit count, `1` when absent.
    pub fn unit_count(&self) -> i64 {
        self.units.unwrap_or(1)
    }

    pub fn is_multi_unit(&self) -> bool {
        self.unit_count() > 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndSenses {
    pub darkvision: Option<FieldValue>,
    pub passive_perception: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndTrait {
    pub name: Option<FieldValue>,
    pub description: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndAction {
    pub name: Option<FieldValue>,
    #[serde(rename = "type")]
    pub action_type: Option<FieldValue>,
    pub attack_bonus: Option<FieldValue>,
    pub damage: Option<FieldValue>,
    pub damage_type: Option<FieldValue>,
    pub reach: Option<FieldValue>,
    pub range: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub effect: Option<FieldValue>,
}

impl DndAction {
    /// Melee reach when given, otherwise ranged distance.
    pub fn distance(&self) -> Option<&FieldValue> {
        self.reach
            .as_ref()
            .filter(|r| r.is_meaningful())
            .or(self.range.as_ref())
    }
}
