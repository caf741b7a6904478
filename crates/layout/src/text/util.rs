use super::ELLIPSIS;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit pattern"));

/// Shortens `text` to at most `budget` characters, marking the cut with an
/// ellipsis. Text already within budget is returned unchanged.
pub fn truncate_chars(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    if budget <= ELLIPSIS.len() {
        return text.chars().take(budget).collect();
    }
    let mut out: String = text.chars().take(budget - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// The first run of ASCII digits in `text`, if any parses as a number.
pub fn first_number(text: &str) -> Option<u64> {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
