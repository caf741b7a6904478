//! COF Mini and Timothée cards.
//!
//! Both systems read the same record schema and draw the same sections;
//! only COF Mini prints the creature type line.

use super::{Plan, Section};
use crate::config::Theme;
use crate::sections::{fantasy_title, paragraph, section_heading};
use battlesheet_layout::capitalize;
use battlesheet_render_core::{Advance, Align, Border, Canvas, StyleGuard};
use battlesheet_types::value::{display_or, meaningful};
use battlesheet_types::{CofAttack, CofCreature, CofSpecialAbility, GameSystem};
use itertools::Itertools;

pub const COF_MINI_PLAN: Plan<CofCreature> = Plan {
    system: GameSystem::CofMini,
    sections: &[title, description, creature_type, defenses, characteristics, attacks, abilities],
};

pub const TIMOTHEE_PLAN: Plan<CofCreature> = Plan {
    system: GameSystem::Timothee,
    sections: SHARED_SECTIONS,
};

const SHARED_SECTIONS: &[Section<CofCreature>] =
    &[title, description, defenses, characteristics, attacks, abilities];

const INTRO_SIZE: f32 = 8.0;
const BODY_SIZE: f32 = 9.0;
const ROW_HEIGHT: f32 = 4.0;
const PARAGRAPH_WIDTH: f32 = 85.0;

fn line(canvas: &mut dyn Canvas, text: &str) {
    let left = canvas.geometry().left_margin;
    canvas.set_x(left);
    canvas.cell(0.0, ROW_HEIGHT, text, Border::None, Align::Left, Advance::NextLine);
}

fn title(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    let name = creature.name.as_deref().unwrap_or("Créature sans nom");
    let heading = match meaningful(creature.niveau.as_ref()) {
        Some(niveau) => format!("{} (Niveau {})", name, niveau),
        None => name.to_string(),
    };
    fantasy_title(canvas, theme, &heading, None);
}

fn description(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    let Some(text) = meaningful(creature.description.as_ref()) else {
        return;
    };
    let mut intro = StyleGuard::font(canvas, theme.body(INTRO_SIZE));
    paragraph(&mut *intro, PARAGRAPH_WIDTH, ROW_HEIGHT, &text);
    intro.newline(Some(3.0));
}

fn creature_type(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    if let Some(kind) = meaningful(creature.creature_type.as_ref()) {
        line(&mut *StyleGuard::font(canvas, theme.body(INTRO_SIZE)), &format!("Type: {}", kind));
    }
}

fn defenses(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    let text = format!(
        "Défense {} • Points de vie {}",
        display_or(creature.defenses.defense.as_ref(), "N/A"),
        display_or(creature.defenses.points_de_vie.as_ref(), "N/A"),
    );
    line(&mut *StyleGuard::font(canvas, theme.body(BODY_SIZE)), &text);
}

/// "Force +2 • Agilité -1 • …" in record order.
fn characteristics_line(creature: &CofCreature) -> String {
    creature
        .caracteristiques
        .iter()
        .map(|(name, value)| format!("{} {}", capitalize(name), value.signed()))
        .join(" • ")
}

fn characteristics(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    if creature.caracteristiques.is_empty() {
        return;
    }
    section_heading(canvas, theme, "CARACTÉRISTIQUES");
    let mut body = StyleGuard::font(canvas, theme.body(BODY_SIZE));
    paragraph(&mut *body, PARAGRAPH_WIDTH, ROW_HEIGHT, &characteristics_line(creature));
    body.newline(Some(2.0));
}

fn attack_line(attack: &CofAttack) -> String {
    let name = display_or(attack.nom.as_ref(), "Attaque");
    let damage = display_or(attack.degats.as_ref(), "");
    match meaningful(attack.attack_type.as_ref()) {
        Some(kind) => format!("{} ({}): {}", name, kind, damage),
        None => format!("{}: {}", name, damage),
    }
}

fn attacks(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    if creature.attaques.is_empty() {
        return;
    }
    section_heading(canvas, theme, "ATTAQUES");
    let mut body = StyleGuard::font(canvas, theme.body(BODY_SIZE));
    for attack in &creature.attaques {
        line(&mut *body, &attack_line(attack));
    }
    body.newline(Some(1.0));
}

fn ability_text(ability: &CofSpecialAbility) -> String {
    let mut text = format!(
        "{}: {}",
        display_or(ability.nom.as_ref(), "Capacité"),
        display_or(ability.description.as_ref(), "")
    );
    let details = [
        ("Portée", &ability.portee),
        ("Difficulté", &ability.difficulte),
        ("Déplacement", &ability.deplacement),
    ];
    for (label, value) in details {
        if let Some(value) = meaningful(value.as_ref()) {
            text.push_str(&format!(" ({}: {})", label, value));
        }
    }
    text
}

fn abilities(canvas: &mut dyn Canvas, theme: &Theme, creature: &CofCreature) {
    if creature.capacites_speciales.is_empty() {
        return;
    }
    section_heading(canvas, theme, "CAPACITÉS SPÉCIALES");
    let mut body = StyleGuard::font(canvas, theme.body(BODY_SIZE));
    for ability in &creature.capacites_speciales {
        paragraph(&mut *body, PARAGRAPH_WIDTH, ROW_HEIGHT, &ability_text(ability));
        body.newline(Some(2.0));
    }
}
