use super::Plan;
use crate::config::Theme;
use crate::sections::{
    LINE_HEIGHT, ListItem, base_hit_points, body_width, fantasy_title, item_list, paragraph, section_heading,
    stat_grid, truncate_cell, two_column_rows, unit_hp_values, unit_row, CELL_BUDGET,
};
use battlesheet_render_core::{Canvas, StyleGuard};
use battlesheet_types::value::{display_or, meaningful};
use battlesheet_types::{DndAction, DndCreature, DndSenses, GameSystem};
use itertools::Itertools;

pub const DND_PLAN: Plan<DndCreature> = Plan {
    system: GameSystem::Dnd,
    sections: &[title, defenses, abilities, traits, actions, unit_table],
};

const BODY_SIZE: f32 = 7.0;
const UNKNOWN_TYPE: &str = "Type inconnu";

fn title(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    let name = creature.name.as_deref().unwrap_or("Nom inconnu");
    let creature_type = creature.creature_type.as_deref().unwrap_or(UNKNOWN_TYPE);
    let type_line = if creature.is_multi_unit() {
        format!("{} (x{})", creature_type, creature.unit_count())
    } else {
        creature_type.to_string()
    };
    fantasy_title(canvas, theme, name, Some(&type_line));
}

/// "Vision: …, PP: …", dropping the passive perception when the cell
/// would not fit.
fn vision_cell(senses: &DndSenses) -> String {
    let vision = format!("Vision: {}", display_or(senses.darkvision.as_ref(), "N/A"));
    let full = format!("{}, PP: {}", vision, display_or(senses.passive_perception.as_ref(), "N/A"));
    if full.chars().count() > CELL_BUDGET {
        truncate_cell(&vision)
    } else {
        full
    }
}

fn defenses(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    section_heading(canvas, theme, "DÉFENSES & CAPACITÉS");

    let mut block = StyleGuard::font(canvas, theme.body(BODY_SIZE));
    let column_width = (block.content_width() - 4.0) / 2.0;
    let cell = |label: &str, value| truncate_cell(&format!("{}: {}", label, display_or(value, "N/A")));
    let rows = [
        (cell("PV", creature.hit_points.as_ref()), cell("Vitesse", creature.speed.as_ref())),
        (cell("CA", creature.armor_class.as_ref()), vision_cell(&creature.senses)),
    ];
    two_column_rows(&mut *block, column_width, LINE_HEIGHT, &rows);
    block.newline(Some(2.0));

    let width = body_width(&*block);
    let lists = [
        ("Immunités dégâts", &creature.damage_immunities),
        ("Immunités états", &creature.condition_immunities),
        ("Vulnérabilités", &creature.vulnerabilities),
    ];
    for (label, value) in lists {
        if let Some(value) = meaningful(value.as_ref()) {
            paragraph(&mut *block, width, LINE_HEIGHT, &format!("{}: {}", label, value));
        }
    }
    block.newline(Some(2.0));
}

fn abilities(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    section_heading(canvas, theme, "STATISTIQUES PRINCIPALES");
    stat_grid(canvas, theme, &creature.stats, &creature.modifiers, &creature.saving_throws);
    canvas.newline(Some(2.0));
}

fn traits(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    if creature.traits.is_empty() {
        return;
    }
    section_heading(canvas, theme, "TRAITS");
    let items: Vec<ListItem> = creature
        .traits
        .iter()
        .map(|t| {
            ListItem::named(format!("{}:", display_or(t.name.as_ref(), "Trait inconnu")))
                .line_if(meaningful(t.description.as_ref()))
        })
        .collect();
    item_list(canvas, theme, BODY_SIZE, &items);
}

fn action_item(action: &DndAction) -> ListItem {
    let name = display_or(action.name.as_ref(), "Action inconnue");
    let header = match meaningful(action.action_type.as_ref()) {
        Some(kind) if kind != UNKNOWN_TYPE => format!("{} ({})", name, kind),
        _ => name,
    };

    let attack = action
        .attack_bonus
        .as_ref()
        .filter(|bonus| bonus.is_meaningful())
        .map(|bonus| format!("Attaque: {}", bonus.signed()));
    let damage = meaningful(action.damage.as_ref()).map(|damage| match meaningful(action.damage_type.as_ref()) {
        Some(kind) => format!("Dégâts: {} {}", damage, kind),
        None => format!("Dégâts: {}", damage),
    });
    let combat = [attack, damage].into_iter().flatten().join(", ");

    ListItem::named(header)
        .line_if(Some(combat).filter(|line| !line.is_empty()))
        .line_if(meaningful(action.distance()).map(|d| format!("Portée: {}", d)))
        .line_if(meaningful(action.description.as_ref()).map(|d| format!("Description: {}", d)))
        .line_if(meaningful(action.effect.as_ref()).map(|e| format!("Effet: {}", e)))
}

fn actions(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    section_heading(canvas, theme, "ATTAQUES");
    let items: Vec<ListItem> = creature.actions.iter().map(action_item).collect();
    item_list(canvas, theme, BODY_SIZE, &items);
}

fn unit_table(canvas: &mut dyn Canvas, theme: &Theme, creature: &DndCreature) {
    if !creature.is_multi_unit() {
        return;
    }
    let base_hp = base_hit_points(creature.hit_points.as_ref());
    unit_row(canvas, theme, &unit_hp_values(base_hp, creature.unit_count()));
}
