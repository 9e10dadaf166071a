use crate::{animation::Animation, text::renderable::RenderableText};

use super::error::ContractError;

/// Rows available on a board, bounded by the number of unique row tokens
pub const MAX_LINES: usize = 15;

/// One row of a board. `index` is its position from the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Line<T> {
    content: T,
    index: usize,
    animation: Option<Animation<T>>,
}

impl<T: RenderableText> Line<T> {
    pub fn new(content: T, index: usize) -> Result<Self, ContractError> {
        if index >= MAX_LINES {
            return Err(ContractError::LineAboveCapacity {
                line: index,
                max: MAX_LINES,
            });
        }
        Ok(Self::at(content, index))
    }

    pub(crate) fn at(content: T, index: usize) -> Self {
        Self {
            content,
            index,
            animation: None,
        }
    }

    /// An animated line starts out showing the animation's original value
    pub fn animated(animation: Animation<T>, index: usize) -> Result<Self, ContractError> {
        let mut line = Self::new(animation.original().clone(), index)?;
        line.animation = Some(animation);
        Ok(line)
    }

    pub fn with_animation(mut self, animation: Animation<T>) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn animation(&self) -> Option<&Animation<T>> {
        self.animation.as_ref()
    }

    pub fn set_animation(&mut self, animation: Option<Animation<T>>) {
        self.animation = animation;
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    pub fn char_len(&self) -> usize {
        self.content.char_len()
    }

    /// What the row shows this tick: the next animation frame if animated,
    /// the static content otherwise
    pub fn render(&mut self) -> T {
        match self.animation.as_mut() {
            Some(animation) => animation.next_frame(),
            None => self.content.clone(),
        }
    }

    /// Longest text this line can put on screen, across all its frames
    pub fn max_char_len(&self) -> usize {
        let frames = self
            .animation
            .iter()
            .flat_map(|animation| animation.frames())
            .map(RenderableText::char_len);
        frames.fold(self.char_len(), usize::max)
    }
}
