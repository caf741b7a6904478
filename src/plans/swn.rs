use super::Plan;
use crate::config::Theme;
use crate::sections::{LINE_HEIGHT, ListItem, item_list, scifi_title, section_heading, two_column_rows};
use battlesheet_render_core::{Canvas, StyleGuard};
use battlesheet_types::value::{display_or, meaningful};
use battlesheet_types::{FieldValue, GameSystem, SwnCreature, SwnStats, SwnWeapon};
use itertools::{EitherOrBoth, Itertools};

pub const SWN_PLAN: Plan<SwnCreature> = Plan {
    system: GameSystem::Swn,
    sections: &[title, stats, capacities, weapons],
};

const BODY_SIZE: f32 = 7.0;
const LEFT_STATS: [&str; 4] = ["PV", "CA", "Initiative", "Effort"];
const RIGHT_STATS: [&str; 5] = ["Moral", "Déplacement", "Réaction mentale", "Réaction physique", "Réaction évasion"];

fn title(canvas: &mut dyn Canvas, theme: &Theme, creature: &SwnCreature) {
    let full_title = creature.title.as_deref().unwrap_or("Créature inconnue");
    scifi_title(canvas, theme, full_title, creature.role.as_deref());
}

fn stat_text(stats: &SwnStats, label: &str) -> String {
    stats
        .get(label)
        .map(|value| format!("{}: {}", label, value))
        .unwrap_or_default()
}

/// Left and right columns side by side; the shorter column pads with blanks.
fn stat_rows(stats: &SwnStats) -> Vec<(String, String)> {
    LEFT_STATS
        .iter()
        .zip_longest(RIGHT_STATS.iter())
        .map(|pair| match pair {
            EitherOrBoth::Both(left, right) => (stat_text(stats, left), stat_text(stats, right)),
            EitherOrBoth::Left(left) => (stat_text(stats, left), String::new()),
            EitherOrBoth::Right(right) => (String::new(), stat_text(stats, right)),
        })
        .collect()
}

fn stats(canvas: &mut dyn Canvas, theme: &Theme, creature: &SwnCreature) {
    section_heading(canvas, theme, "STATISTIQUES");
    let Some(stats) = creature.stats.as_ref().filter(|s| !s.is_empty()) else {
        return;
    };

    let mut block = StyleGuard::font(canvas, theme.body(BODY_SIZE));
    let column_width = (block.content_width() - 4.0) / 2.0;
    two_column_rows(&mut *block, column_width, LINE_HEIGHT, &stat_rows(stats));
    block.newline(Some(2.0));
}

/// "Name: description" capacities get a bold name; anything else is plain.
fn capacity_item(capacity: &FieldValue) -> ListItem {
    let text = capacity.to_string();
    match text.split_once(':') {
        Some((name, description)) => ListItem::named(format!("{}:", name.trim())).line(description.trim()),
        None => ListItem::plain(text),
    }
}

fn capacities(canvas: &mut dyn Canvas, theme: &Theme, creature: &SwnCreature) {
    if creature.capacities.is_empty() {
        return;
    }
    section_heading(canvas, theme, "CAPACITÉS SPÉCIALES");
    let items: Vec<ListItem> = creature.capacities.iter().map(capacity_item).collect();
    item_list(canvas, theme, BODY_SIZE, &items);
}

fn weapon_item(weapon: &SwnWeapon) -> ListItem {
    let profile = [
        meaningful(weapon.damage.as_ref()).map(|d| format!("Dégâts: {}", d)),
        meaningful(weapon.range.as_ref()).map(|r| format!("Portée: {}", r)),
    ]
    .into_iter()
    .flatten()
    .join(", ");

    ListItem::named(display_or(weapon.name.as_ref(), "Arme inconnue"))
        .line_if(Some(profile).filter(|line| !line.is_empty()))
        .line_if(meaningful(weapon.special.as_ref()).map(|t| format!("Trait: {}", t)))
}

fn weapons(canvas: &mut dyn Canvas, theme: &Theme, creature: &SwnCreature) {
    if creature.weapons.is_empty() {
        return;
    }
    section_heading(canvas, theme, "ARMES");
    let items: Vec<ListItem> = creature.weapons.iter().map(weapon_item).collect();
    item_list(canvas, theme, BODY_SIZE, &items);
}
