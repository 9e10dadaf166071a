mod session;
mod session_id;
mod session_state;

pub(crate) use session::lock_session;
pub use session::{Session, SharedSession};
pub use session_id::SessionId;
pub use session_state::SessionState;
