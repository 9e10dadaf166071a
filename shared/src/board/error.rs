use thiserror::Error;

/// Caller contract violations. These are raised before any packet is
/// queued and leave the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Line number is not a currently visible row
    #[error("Line number {line} must be under {size}")]
    LineOutOfRange { line: usize, size: usize },

    /// Line number can never be displayed
    #[error("Line number {line} is too high, a board holds at most {max} lines")]
    LineAboveCapacity { line: usize, max: usize },

    /// A body with more rows than there are row tokens
    #[error("Body has {size} lines, a board holds at most {max} lines")]
    BodyOverCapacity { size: usize, max: usize },

    /// Any mutation after `delete()`
    #[error("Session {id} is deleted")]
    SessionDeleted { id: String },

    /// Only one session per viewer
    #[error("Viewer {viewer} already has a session")]
    SessionAlreadyExists { viewer: String },

    /// Operation addressed a viewer with no session
    #[error("Viewer {viewer} has no session")]
    UnknownViewer { viewer: String },

    /// Update interval must be at least one tick
    #[error("Invalid update interval of {ticks} ticks")]
    InvalidTickInterval { ticks: u64 },
}

/// Content that the negotiated protocol generation cannot display
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Title is {length} chars long, the limit is {max}")]
    TitleTooLong { length: usize, max: usize },

    #[error("Line {line} is {length} chars long, the limit is {max}")]
    LineTooLong { line: usize, length: usize, max: usize },
}
