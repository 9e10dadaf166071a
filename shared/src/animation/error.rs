use thiserror::Error;

/// Errors that can occur while building an animation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// An animation needs at least one frame to cycle through
    #[error("Animation frame sequence is empty")]
    EmptySequence,
}
