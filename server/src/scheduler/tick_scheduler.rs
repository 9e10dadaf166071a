use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use log::{debug, info, trace, warn};
use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use sidebar_shared::RenderableText;

use crate::{error::BoardError, server::BoardServer};

struct Driver {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// Periodically refreshes every session of a [`BoardServer`] on the
/// current tokio runtime.
///
/// Holds the server weakly: dropping the server ends the driver. Stopping
/// lets a refresh that is already running finish.
pub struct TickScheduler<T: RenderableText> {
    server: Weak<BoardServer<T>>,
    driver: Option<Driver>,
}

impl<T: RenderableText> TickScheduler<T> {
    pub fn new(server: &Arc<BoardServer<T>>) -> Self {
        Self {
            server: Arc::downgrade(server),
            driver: None,
        }
    }

    /// Starts refreshing every [`BoardServer::refresh_period`]; the first
    /// refresh happens one period from now. Does nothing if already running.
    pub fn start(&mut self) -> Result<(), BoardError> {
        if self.is_running() {
            return Ok(());
        }
        let runtime = Handle::try_current().map_err(|_| BoardError::NoRuntime)?;
        let server = self.server.upgrade().ok_or(BoardError::ServerDropped)?;
        let period = server.refresh_period();

        let (stop, stop_receiver) = watch::channel(false);
        let task = runtime.spawn(drive(self.server.clone(), period, stop_receiver));
        self.driver = Some(Driver { stop, task });

        info!("Tick scheduler started, refreshing every {:?}", period);
        Ok(())
    }

    pub fn stop(&mut self) {
        let Some(driver) = self.driver.take() else {
            return;
        };
        if driver.stop.send(true).is_err() {
            debug!("Tick scheduler driver had already exited");
        }
        info!("Tick scheduler stopped");
    }

    pub fn is_running(&self) -> bool {
        self.driver
            .as_ref()
            .is_some_and(|driver| !driver.task.is_finished())
    }

    /// Changes the server's update interval, restarting the driver if it is
    /// running so the new period applies immediately
    pub fn set_tick_interval(&mut self, ticks: u64) -> Result<(), BoardError> {
        let server = self.server.upgrade().ok_or(BoardError::ServerDropped)?;
        server.set_tick_interval(ticks)?;

        if self.driver.is_some() {
            self.stop();
            self.start()?;
        }
        Ok(())
    }
}

impl<T: RenderableText> Drop for TickScheduler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn drive<T: RenderableText>(
    server: Weak<BoardServer<T>>,
    period: Duration,
    mut stop: watch::Receiver<bool>,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let Some(server) = server.upgrade() else {
                    debug!("Board server dropped, tick scheduler exiting");
                    break;
                };
                match server.tick() {
                    Ok(refreshed) => trace!("Refreshed {} boards", refreshed),
                    Err(error) => warn!("Scheduled refresh failed: {}", error),
                }
            }
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }
}
