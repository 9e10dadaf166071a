/// Lifecycle of a session. `Deleted` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Objective created and displayed, rows not yet sent
    Created,
    Active,
    Deleted,
}
