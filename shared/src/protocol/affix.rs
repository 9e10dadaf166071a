use crate::{
    board::line::MAX_LINES,
    text::{
        chat_color::{ChatColor, COLOR_CHAR},
        legacy::last_colors,
    },
};

use super::error::EncodeError;

/// A row's text as the team prefix and suffix it is displayed through
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affixes {
    pub prefix: String,
    pub suffix: String,
}

/// The unique invisible entry name of the row at `score`: `§0` for score 0
/// up to `§e` for score 14
pub fn row_token(score: usize) -> Result<String, EncodeError> {
    if score >= MAX_LINES {
        return Err(EncodeError::RowOutOfRange { score });
    }
    Ok(ChatColor::ALL[score].to_string())
}

/// Prefix shown by an empty row
pub fn sentinel(score: usize) -> Result<String, EncodeError> {
    Ok(format!("{}{}", row_token(score)?, ChatColor::Reset))
}

/// Splits `content` into a prefix and suffix of at most `max_length`
/// characters each.
///
/// The split never separates `§` from its code, and the suffix restarts
/// with the colors active at the end of the prefix unless it opens with a
/// color of its own. Halves that are still too long are cut.
pub fn split_affixes(content: &str, max_length: usize) -> Affixes {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= max_length {
        return Affixes {
            prefix: content.to_string(),
            suffix: String::new(),
        };
    }
    if max_length == 0 {
        return Affixes::default();
    }

    let index = if chars[max_length - 1] == COLOR_CHAR {
        max_length - 1
    } else {
        max_length
    };
    let prefix: String = chars[..index].iter().collect();
    let rest = &chars[index..];

    let opening = if rest.len() >= 2 && rest[0] == COLOR_CHAR {
        ChatColor::by_char(rest[1])
    } else {
        None
    };
    let carry = match opening {
        Some(code) if !code.is_format() => String::new(),
        _ => {
            let colors = last_colors(&prefix);
            if colors.is_empty() {
                ChatColor::Reset.to_string()
            } else {
                colors
            }
        }
    };

    let mut suffix = carry;
    suffix.extend(rest.iter());

    Affixes {
        prefix: truncate(prefix, max_length),
        suffix: truncate(suffix, max_length),
    }
}

fn truncate(text: String, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text;
    }
    text.chars().take(max_length).collect()
}
