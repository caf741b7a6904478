use serde_json::{Value, json};

pub fn goblin_band() -> Value {
    json!({
        "name": "Bande de gobelins",
        "type": "Humanoïde",
        "units": 4,
        "hit_points": "58 (13d6 + 13)",
        "speed": "9 m",
        "armor_class": 15,
        "senses": {"darkvision": "18 m", "passive_perception": 9},
        "stats": {"FOR": 8, "DEX": 14, "CON": 12, "INT": 10, "SAG": 8, "CHA": 8},
        "modifiers": {"FOR": -1, "DEX": 2, "CON": 1, "INT": 0, "SAG": -1, "CHA": -1},
        "saving_throws": {"DEX": 4},
        "traits": [{"name": "Fuite agile", "description": "Se désengage en action bonus."}],
        "actions": [
            {"name": "Cimeterre", "type": "Corps à corps", "attack_bonus": 4, "damage": "1d6 + 2", "damage_type": "tranchant", "reach": "1,5 m"},
            {"name": "Arc court", "attack_bonus": 4, "damage": "1d6 + 2", "damage_type": "perforant", "range": "24/96 m"}
        ]
    })
}

pub fn dnd_named(name: &str) -> Value {
    json!({"name": name, "hit_points": 7})
}

pub fn void_strider() -> Value {
    json!({
        "title": "Void Strider — The Last Hunter",
        "role": "Prédateur des coursives",
        "stats": {"PV": 30, "CA": 16, "Initiative": 2, "Moral": 9, "Déplacement": "15 m"},
        "capacities": ["Camouflage: invisible dans l'obscurité", "Implacable"],
        "weapons": [{"name": "Griffes", "damage": "1d8", "range": "contact", "trait": "Perforant"}]
    })
}

pub fn spectre() -> Value {
    json!({
        "name": "Spectre",
        "niveau": 4,
        "type": "Mort-vivant",
        "defenses": {"defense": 15, "points_de_vie": 22},
        "caracteristiques": {"force": 1, "agilité": 2, "constitution": -1},
        "attaques": [{"nom": "Toucher glacial", "degats": "1d6", "type": "contact"}],
        "capacites_speciales": [{"nom": "Lamentation", "description": "Effraie les vivants.", "portee": "10 m"}]
    })
}
