use crate::{
    animation::Animation,
    text::{legacy::colorize, renderable::RenderableText},
};

/// Board title, replaced wholesale on every refresh
#[derive(Clone, Debug, PartialEq)]
pub struct Title<T> {
    content: T,
    animation: Option<Animation<T>>,
}

impl<T: RenderableText> Title<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            animation: None,
        }
    }

    pub fn animated(animation: Animation<T>) -> Self {
        Self {
            content: animation.original().clone(),
            animation: Some(animation),
        }
    }

    pub fn with_animation(mut self, animation: Animation<T>) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn animation(&self) -> Option<&Animation<T>> {
        self.animation.as_ref()
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    pub fn render(&mut self) -> T {
        match self.animation.as_mut() {
            Some(animation) => animation.next_frame(),
            None => self.content.clone(),
        }
    }

    pub fn max_char_len(&self) -> usize {
        let frames = self
            .animation
            .iter()
            .flat_map(|animation| animation.frames())
            .map(RenderableText::char_len);
        frames.fold(self.content.char_len(), usize::max)
    }

    /// Content and animation sequence match, cursors aside
    pub fn same_as(&self, other: &Title<T>) -> bool {
        if self.content != other.content {
            return false;
        }
        match (&self.animation, &other.animation) {
            (None, None) => true,
            (Some(mine), Some(theirs)) => mine.same_sequence(theirs),
            _ => false,
        }
    }

    /// Keeps the running cursor of `previous` when this title was
    /// regenerated with the same animation sequence
    pub fn inherit_animation(&mut self, previous: &Title<T>) {
        let (Some(mine), Some(running)) = (self.animation.as_ref(), previous.animation.as_ref()) else {
            return;
        };
        if mine.same_sequence(running) {
            self.animation = Some(running.clone());
        }
    }
}

impl Title<String> {
    /// Title from text with `&` color codes
    pub fn legacy(text: &str) -> Self {
        Self::new(colorize('&', text))
    }
}
