use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwnCreature {
    /// Composite "Name – Subtitle" heading.
    pub title: Option<String>,
    pub role: Option<String>,
    pub stats: Option<SwnStats>,
    /// Free text, optionally shaped "Name: Description".
    pub capacities: Vec<FieldValue>,
    pub weapons: Vec<SwnWeapon>,
}

/// The fixed SWN stat block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwnStats {
    #[serde(rename = "PV")]
    pub hit_points: Option<FieldValue>,
    #[serde(rename = "CA")]
    pub armor_class: Option<FieldValue>,
    #[serde(rename = "Initiative")]
    pub initiative: Option<FieldValue>,
    #[serde(rename = "Effort")]
    pub effort: Option<FieldValue>,
    #[serde(rename = "Moral")]
    pub morale: Option<FieldValue>,
    #[serde(rename = "Déplacement")]
    pub movement: Option<FieldValue>,
    #[serde(rename = "Réaction mentale")]
    pub mental_save: Option<FieldValue>,
    #[serde(rename = "Réaction physique")]
    pub physical_save: Option<FieldValue>,
    #[serde(rename = "Réaction évasion")]
    pub evasion_save: Option<FieldValue>,
}

impl SwnStats {
    /// Looks a stat up by its printed label.
    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        match label {
            "PV" => self.hit_points.as_ref(),
            "CA" => self.armor_class.as_ref(),
            "Initiative" => self.initiative.as_ref(),
            "Effort" => self.effort.as_ref(),
            "Moral" => self.morale.as_ref(),
            "Déplacement" => self.movement.as_ref(),
            "Réaction mentale" => self.mental_save.as_ref(),
            "Réaction physique" => self.physical_save.as_ref(),
            "Réaction évasion" => self.evasion_save.as_ref(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SwnStats::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwnWeapon {
    pub name: Option<FieldValue>,
    pub damage: Option<FieldValue>,
    pub range: Option<FieldValue>,
    #[serde(rename = "trait")]
    pub special: Option<FieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_french_stat_labels() {
        let creature: SwnCreature = serde_json::from_str(
            r#"{
                "title": "Void Strider — The Last Hunter",
                "stats": {"PV": 22, "Déplacement": "10 m", "Réaction évasion": 13},
                "weapons": [{"name": "Lame monofilament", "damage": "1d8+2", "trait": "Perforant"}]
            }"#,
        )
        .unwrap();

        let stats = creature.stats.unwrap();
        assert_eq!(stats.get("PV"), Some(&FieldValue::Int(22)));
        assert_eq!(stats.get("Déplacement"), Some(&FieldValue::text("10 m")));
        assert_eq!(stats.get("Réaction évasion"), Some(&FieldValue::Int(13)));
        assert_eq!(stats.get("Moral"), None);
        assert!(!stats.is_empty());
        assert_eq!(creature.weapons[0].special, Some(FieldValue::text("Perforant")));
    }
}
