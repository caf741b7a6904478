use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Record shape shared by COF Mini and the Timothée system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CofCreature {
    pub name: Option<String>,
    pub niveau: Option<FieldValue>,
    pub description: Option<FieldValue>,
    #[serde(rename = "type")]
    pub creature_type: Option<FieldValue>,
    pub defenses: CofDefenses,
    /// Signed characteristic bonuses in display order.
    pub caracteristiques: IndexMap<String, FieldValue>,
    pub attaques: Vec<CofAttack>,
    pub capacites_speciales: Vec<CofSpecialAbility>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CofDefenses {
    pub defense: Option<FieldValue>,
    pub points_de_vie: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CofAttack {
    pub nom: Option<FieldValue>,
    pub degats: Option<FieldValue>,
    #[serde(rename = "type")]
    pub attack_type: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CofSpecialAbility {
    pub nom: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub portee: Option<FieldValue>,
    pub difficulte: Option<FieldValue>,
    pub deplacement: Option<FieldValue>,
}
