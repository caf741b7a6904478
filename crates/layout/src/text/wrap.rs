use super::util::truncate_chars;
use log::trace;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Greedy word-wrap against a character budget with a ceiling on line count.
///
/// Words accumulate on the current line while `len(line) + len(word) + 1`
/// stays within `max_chars`. A word longer than the budget is cut to
/// `max_chars - 3` characters plus `"..."`. Once `max_lines` lines are
/// complete, wrapping stops and every remaining word is dropped: fixed-size
/// cards rely on that truncation.
///
/// Blank input yields a single empty line. Input that already fits is
/// returned unchanged as the only line.
pub fn wrap_text(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let max_lines = max_lines.max(1);

    if text.trim().is_empty() {
        return vec![String::new()];
    }
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if char_len(&current) + char_len(word) + 1 > max_chars {
            if current.is_empty() {
                current = truncate_chars(word, max_chars);
                continue;
            }
            lines.push(std::mem::replace(&mut current, truncate_chars(word, max_chars)));
            if lines.len() >= max_lines {
                trace!("Dropping text past {} line(s) of {} chars", max_lines, max_chars);
                current.clear();
                break;
            }
        } else if current.is_empty() {
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines
}
