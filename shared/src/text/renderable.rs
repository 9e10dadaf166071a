use std::fmt::Debug;

use super::component::Component;

/// Content that can be placed on a scoreboard row or title.
///
/// Implemented for section-coded `String`s and for rich [`Component`]s, so
/// the board model and differ are written once for both.
pub trait RenderableText: Clone + Debug + PartialEq + Send + Sync + 'static {
    fn empty() -> Self;

    /// Flattens into a plain section-coded string, the form used by
    /// generations without rich text
    fn to_plain(&self) -> String;

    fn to_component(&self) -> Component;

    fn is_empty(&self) -> bool;

    fn concat(&self, other: &Self) -> Self;

    /// Character count of the plain form, which is what legacy length
    /// limits are measured in
    fn char_len(&self) -> usize {
        self.to_plain().chars().count()
    }
}

impl RenderableText for String {
    fn empty() -> Self {
        String::new()
    }

    fn to_plain(&self) -> String {
        self.clone()
    }

    fn to_component(&self) -> Component {
        Component::from_legacy(self)
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn concat(&self, other: &Self) -> Self {
        let mut output = String::with_capacity(self.len() + other.len());
        output.push_str(self);
        output.push_str(other);
        output
    }

    fn char_len(&self) -> usize {
        self.chars().count()
    }
}

impl RenderableText for Component {
    fn empty() -> Self {
        Component::empty()
    }

    fn to_plain(&self) -> String {
        self.to_legacy()
    }

    fn to_component(&self) -> Component {
        self.clone()
    }

    fn is_empty(&self) -> bool {
        Component::is_empty(self)
    }

    fn concat(&self, other: &Self) -> Self {
        if Component::is_empty(self) {
            return other.clone();
        }
        Component {
            extra: vec![self.clone(), other.clone()],
            ..Component::default()
        }
    }
}
