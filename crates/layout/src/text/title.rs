/// Separators between a name and its subtitle, in priority order.
const SEPARATORS: [&str; 3] = [" – ", " - ", " — "];

/// Splits a composite heading such as `"Orc Warlord – Frontline Brute"` into
/// its name and subtitle.
///
/// The first separator (in priority order) present in the string wins and the
/// split happens at its first occurrence only. Without a separator the whole
/// trimmed string is the name and the subtitle is empty.
pub fn parse_title(title: &str) -> (String, String) {
    for sep in SEPARATORS {
        if let Some((name, subtitle)) = title.split_once(sep) {
            return (name.trim().to_string(), subtitle.trim().to_string());
        }
    }
    (title.trim().to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(title: &str) -> (String, String) {
        parse_title(title)
    }

    #[test]
    fn splits_on_each_separator() {
        assert_eq!(
            split("Orc Warlord – Frontline Brute"),
            ("Orc Warlord".into(), "Frontline Brute".into())
        );
        assert_eq!(split("Drone - Scout"), ("Drone".into(), "Scout".into()));
        assert_eq!(
            split("Void Strider — The Last Hunter"),
            ("Void Strider".into(), "The Last Hunter".into())
        );
    }

    #[test]
    fn no_separator_means_name_only() {
        assert_eq!(split("Just A Name"), ("Just A Name".into(), String::new()));
        assert_eq!(split("  Padded  "), ("Padded".into(), String::new()));
        assert_eq!(split(""), (String::new(), String::new()));
    }

    #[test]
    fn splits_at_first_occurrence_only() {
        assert_eq!(
            split("Mech - Mk II - Prototype"),
            ("Mech".into(), "Mk II - Prototype".into())
        );
    }

    #[test]
    fn en_dash_outranks_earlier_hyphen() {
        // The hyphen appears first in the string, but the en dash has priority.
        assert_eq!(
            split("Cyber-Wolf - Alpha – Pack Leader"),
            ("Cyber-Wolf - Alpha".into(), "Pack Leader".into())
        );
    }

    #[test]
    fn bare_dashes_without_spaces_are_not_separators() {
        assert_eq!(split("Half-Orc"), ("Half-Orc".into(), String::new()));
    }
}
