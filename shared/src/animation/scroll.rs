use crate::text::{
    chat_color::{ChatColor, COLOR_CHAR},
    legacy::colorize,
};

use super::{animation::Animation, error::AnimationError};

// Sliding windows over the message, followed by the gap and the wrap back
// to the start. A color code counts as two characters of window width.
fn windows(message: &str, width: usize, space_between: usize) -> Vec<Vec<char>> {
    let mut message: Vec<char> = message.chars().collect();
    while message.len() < width.max(1) {
        message.push(' ');
    }
    let width = width.saturating_sub(2).max(1);
    let length = message.len();

    let mut list: Vec<Vec<char>> = Vec::new();
    for i in 0..length - width {
        list.push(message[i..i + width].to_vec());
    }

    let mut space: Vec<char> = Vec::new();
    for i in 0..space_between {
        let mut window = message[length - width + i.min(width)..].to_vec();
        window.extend_from_slice(&space);
        list.push(window);
        if space.len() < width {
            space.push(' ');
        }
    }

    for i in 0..width.saturating_sub(space_between) {
        let mut window = message[length - width + space_between + i..].to_vec();
        window.extend_from_slice(&space);
        window.extend_from_slice(&message[..i]);
        list.push(window);
    }

    for i in 0..space_between {
        if i > space.len() {
            break;
        }
        let mut window = space[..space.len() - i].to_vec();
        window.extend_from_slice(&message[..width - space_between.min(width) + i]);
        list.push(window);
    }

    list
}

impl Animation<String> {
    /// Marquee animation: `text` (with `&` codes) scrolls through a window
    /// of `width` characters, separated from its own repeat by
    /// `space_between` blanks.
    pub fn scroll(text: &str, width: usize, space_between: usize) -> Result<Self, AnimationError> {
        let original = colorize('&', text);
        let list = windows(&original, width, space_between);
        if list.is_empty() {
            return Err(AnimationError::EmptySequence);
        }

        let mut frames = Vec::with_capacity(list.len());
        let mut color = ChatColor::Reset;
        let mut position = 0;
        while position < list.len() {
            let mut window = list[position].clone();
            position += 1;

            if window.first() == Some(&COLOR_CHAR) {
                if let Some(code) = window.get(1).and_then(|c| ChatColor::by_char(*c)) {
                    color = code;
                    window = list[position % list.len()].clone();
                    position += 1;
                    if let Some(first) = window.first_mut() {
                        *first = ' ';
                    }
                }
            }
            if let Some(last) = window.last_mut() {
                if *last == COLOR_CHAR {
                    *last = ' ';
                }
            }

            let window: String = window.into_iter().collect();
            frames.push(format!("{color}{window}"));
        }

        Animation::new(original, frames)
    }
}
