use std::sync::Arc;

use sidebar_shared::{Body, RenderableText, Title};

use crate::{error::BoardError, session::Session, viewer::Viewer};

/// Custom per-tick logic that replaces the default title + body refresh.
/// Runs with the session locked.
pub type RefreshHook<T> = Arc<dyn Fn(&mut Session<T>) -> Result<(), BoardError> + Send + Sync>;

/// Supplies a viewer's board content. Asked again on every refresh.
pub trait BoardAdapter<T: RenderableText>: Send + Sync {
    fn title(&self, viewer: &dyn Viewer) -> Title<T>;

    /// Rows top first; at most [`MAX_LINES`](sidebar_shared::MAX_LINES)
    /// are shown
    fn body(&self, viewer: &dyn Viewer) -> Body<T>;

    /// Read once when the adapter is installed
    fn refresh_hook(&self, _viewer: &dyn Viewer) -> Option<RefreshHook<T>> {
        None
    }
}
