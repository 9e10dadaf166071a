use crate::text::legacy::colorize;

use super::{animation::Animation, error::AnimationError};

impl Animation<String> {
    /// One frame per character of `text`: that character is drawn in
    /// `secondary`, everything around it in `primary`. Colors accept `&`
    /// codes, e.g. `highlight("mBoard", "&4&l", "&c&l")`.
    pub fn highlight(text: &str, primary: &str, secondary: &str) -> Result<Self, AnimationError> {
        let primary = colorize('&', primary);
        let secondary = colorize('&', secondary);
        let chars: Vec<char> = text.chars().collect();
        let limit = chars.len();

        let mut frames = Vec::with_capacity(limit);
        for position in 0..limit {
            let mut frame = String::new();
            if position > 0 {
                frame.push_str(&primary);
                frame.extend(&chars[..position]);
            }
            frame.push_str(&secondary);
            frame.push(chars[position]);
            if position + 1 < limit {
                frame.push_str(&primary);
                frame.extend(&chars[position + 1..]);
            }
            frames.push(frame);
        }

        Animation::new(text.to_string(), frames)
    }
}
