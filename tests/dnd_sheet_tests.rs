mod common;

use battlesheet::GameSystem;
use common::fixtures::*;
use common::{TestResult, generate_pdf, init_logger};

#[test]
fn test_multi_unit_row_splits_hit_points() -> TestResult {
    init_logger();

    let pdf = generate_pdf(GameSystem::Dnd, vec![goblin_band()])?;
    assert_pdf_page_count!(pdf, 1);

    let texts = pdf.page_texts(1);
    let tail: Vec<&str> = texts.iter().rev().take(4).rev().map(String::as_str).collect();
    assert_eq!(tail, ["58", "43", "29", "14"]);
    Ok(())
}

#[test]
fn test_sections_appear_in_plan_order() -> TestResult {
    init_logger();

    let pdf = generate_pdf(GameSystem::Dnd, vec![goblin_band()])?;
    let texts = pdf.page_texts(1);
    let position = |needle: &str| texts.iter().position(|t| t == needle);

    assert_eq!(texts[0], "Bande de gobelins");
    assert_eq!(texts[1], "Type : Humanoïde (x4)");
    let order = [
        "DÉFENSES & CAPACITÉS",
        "STATISTIQUES PRINCIPALES",
        "TRAITS",
        "ATTAQUES",
    ]
    .map(|heading| position(heading).expect("heading should be drawn"));
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn test_actions_and_saving_throws() -> TestResult {
    init_logger();

    let pdf = generate_pdf(GameSystem::Dnd, vec![goblin_band()])?;
    assert_pdf_contains_text!(pdf, "Cimeterre (Corps à corps)");
    assert_pdf_contains_text!(pdf, "Attaque: +4, Dégâts: 1d6 + 2 tranchant");
    assert_pdf_contains_text!(pdf, "Portée: 24/96 m");
    assert_pdf_contains_text!(pdf, "Vision: 18 m, PP: 9");

    // DEX save differs from its modifier, so the saving throw row is drawn
    let texts = pdf.page_texts(1);
    assert!(texts.iter().any(|t| t == "+4"));
    Ok(())
}

#[test]
fn test_single_unit_has_no_unit_row() -> TestResult {
    init_logger();

    let pdf = generate_pdf(GameSystem::Dnd, vec![dnd_named("Kobold")])?;
    let texts = pdf.page_texts(1);
    assert_eq!(texts[1], "Type : Type inconnu");
    assert_eq!(texts.last().map(String::as_str), Some("ATTAQUES"));
    Ok(())
}

#[test]
fn test_oversized_group_renders_without_unit_row() -> TestResult {
    init_logger();

    let mut horde = goblin_band();
    horde["units"] = serde_json::json!(i64::MAX);
    let mut single = goblin_band();
    single["units"] = serde_json::json!(1);

    let horde_pdf = generate_pdf(GameSystem::Dnd, vec![horde])?;
    let single_pdf = generate_pdf(GameSystem::Dnd, vec![single])?;
    assert_pdf_page_count!(horde_pdf, 1);
    assert_eq!(horde_pdf.page_texts(1)[2..], single_pdf.page_texts(1)[2..]);
    Ok(())
}
