use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
    time::Duration,
};

use log::{debug, info, warn};

use sidebar_shared::{Capabilities, ContractError, ProtocolEncoder, RenderableText};

use crate::{
    adapter::BoardAdapter,
    error::BoardError,
    registry::SessionRegistry,
    session::{lock_session, Session, SessionId, SharedSession},
    viewer::{Viewer, ViewerId},
};

use super::server_config::{refresh_period, ServerConfig};

/// Owns every viewer's session and refreshes them on [`BoardServer::tick`].
///
/// The registry lock is only held to insert, remove or list sessions; all
/// packets are sent under the individual session's lock.
pub struct BoardServer<T: RenderableText> {
    config: ServerConfig,
    capabilities: Arc<Capabilities>,
    registry: Mutex<SessionRegistry<T>>,
    update_interval_ticks: AtomicU64,
}

impl<T: RenderableText> BoardServer<T> {
    /// Create a new BoardServer. Fails if the configured protocol version
    /// cannot be served.
    pub fn new(config: ServerConfig) -> Result<Self, BoardError> {
        if config.update_interval_ticks == 0 || config.refresh_period().is_zero() {
            return Err(ContractError::InvalidTickInterval {
                ticks: config.update_interval_ticks,
            }
            .into());
        }
        let capabilities = Capabilities::resolve(config.protocol_version)?;
        info!(
            "Board server speaking protocol {} ({} generation)",
            capabilities.protocol_version(),
            capabilities.generation()
        );

        Ok(Self {
            update_interval_ticks: AtomicU64::new(config.update_interval_ticks),
            config,
            capabilities: Arc::new(capabilities),
            registry: Mutex::new(SessionRegistry::new()),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    // Sessions

    /// Creates the viewer's board and shows the adapter's content
    pub fn create_session(
        &self,
        viewer: Arc<dyn Viewer>,
        adapter: Arc<dyn BoardAdapter<T>>,
    ) -> Result<SessionId, BoardError> {
        let viewer_id = viewer.id();
        if self.registry()?.contains(&viewer_id) {
            return Err(ContractError::SessionAlreadyExists {
                viewer: viewer.name().to_string(),
            }
            .into());
        }

        let encoder = ProtocolEncoder::new(self.capabilities.clone());
        let mut session = Session::create(viewer.clone(), adapter, encoder)?;
        if let Err(error) = session.activate() {
            discard(&mut session);
            return Err(error);
        }

        let id = session.id().clone();
        let shared = Arc::new(Mutex::new(session));
        if !self.registry()?.insert(viewer_id, shared.clone()) {
            // another caller registered this viewer meanwhile
            discard(&mut *lock_session(&shared)?);
            return Err(ContractError::SessionAlreadyExists {
                viewer: viewer.name().to_string(),
            }
            .into());
        }
        Ok(id)
    }

    /// Removes the viewer's board from their screen and forgets it
    pub fn destroy_session(&self, viewer: ViewerId) -> Result<(), BoardError> {
        let session = self
            .registry()?
            .remove(&viewer)
            .ok_or_else(|| ContractError::UnknownViewer {
                viewer: viewer.to_string(),
            })?;
        let mut session = lock_session(&session)?;
        session.delete()
    }

    pub fn session(&self, viewer: ViewerId) -> Result<Option<SharedSession<T>>, BoardError> {
        Ok(self.registry()?.get(&viewer))
    }

    pub fn session_count(&self) -> Result<usize, BoardError> {
        Ok(self.registry()?.len())
    }

    // Ticking

    /// Refreshes every live session in registration order and returns how
    /// many refreshed successfully. A failing session is logged and skipped.
    pub fn tick(&self) -> Result<usize, BoardError> {
        let sessions = self.registry()?.in_order();

        let mut refreshed = 0;
        for (viewer, session) in sessions {
            let mut session = match lock_session(&session) {
                Ok(session) => session,
                Err(error) => {
                    warn!("Skipping board of viewer {}: {}", viewer, error);
                    continue;
                }
            };
            if session.is_deleted() {
                continue;
            }
            match session.refresh() {
                Ok(()) => refreshed += 1,
                Err(error) => warn!("Failed to refresh board {}: {}", session.id(), error),
            }
        }
        Ok(refreshed)
    }

    pub fn set_tick_interval(&self, ticks: u64) -> Result<(), BoardError> {
        if ticks == 0 || refresh_period(self.config.tick_duration, ticks).is_zero() {
            return Err(ContractError::InvalidTickInterval { ticks }.into());
        }
        self.update_interval_ticks.store(ticks, Ordering::SeqCst);
        info!("Board update interval set to {} ticks", ticks);
        Ok(())
    }

    /// Game ticks between two refreshes
    pub fn tick_interval(&self) -> u64 {
        self.update_interval_ticks.load(Ordering::SeqCst)
    }

    pub fn refresh_period(&self) -> Duration {
        refresh_period(self.config.tick_duration, self.tick_interval())
    }

    fn registry(&self) -> Result<MutexGuard<'_, SessionRegistry<T>>, BoardError> {
        self.registry
            .lock()
            .map_err(|_| BoardError::LockPoisoned { what: "registry" })
    }
}

fn discard<T: RenderableText>(session: &mut Session<T>) {
    if let Err(error) = session.delete() {
        debug!("Board {} was already deleted: {}", session.id(), error);
    }
}
