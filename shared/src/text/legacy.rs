//! Helpers for section-coded legacy strings (`§a`, `§l`, ...).

use super::chat_color::{ChatColor, COLOR_CHAR};

const ALTERNATE_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replaces `alt` followed by a valid code character with [`COLOR_CHAR`],
/// so `colorize('&', "&aHi")` yields `"§aHi"`.
pub fn colorize(alt: char, text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    for i in 0..len.saturating_sub(1) {
        if chars[i] == alt && ALTERNATE_CODES.contains(chars[i + 1]) {
            chars[i] = COLOR_CHAR;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Returns the codes still in effect at the end of `text`: the last color
/// (or reset) plus any formats applied after it.
pub fn last_colors(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    if chars.len() < 2 {
        return result;
    }

    for index in (0..chars.len() - 1).rev() {
        if chars[index] != COLOR_CHAR {
            continue;
        }
        let Some(color) = ChatColor::by_char(chars[index + 1]) else {
            continue;
        };
        result.insert_str(0, &color.to_string());
        if color.is_color() || color == ChatColor::Reset {
            break;
        }
    }

    result
}

/// Removes every valid formatting code from `text`
pub fn strip_colors(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            if let Some(next) = chars.peek() {
                if ChatColor::by_char(*next).is_some() {
                    chars.next();
                    continue;
                }
            }
        }
        output.push(c);
    }
    output
}
