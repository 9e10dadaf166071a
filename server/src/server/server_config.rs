use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Protocol number negotiated with viewers. Selects the packet layouts
    /// and text limits once, when the server is built.
    pub protocol_version: i32,
    /// Game ticks between two board refreshes
    pub update_interval_ticks: u64,
    /// Length of one game tick
    pub tick_duration: Duration,
}

impl ServerConfig {
    /// Time between two refreshes
    pub fn refresh_period(&self) -> Duration {
        refresh_period(self.tick_duration, self.update_interval_ticks)
    }
}

pub(crate) fn refresh_period(tick_duration: Duration, ticks: u64) -> Duration {
    let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
    tick_duration.saturating_mul(ticks)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            protocol_version: 47,
            update_interval_ticks: 3,
            tick_duration: Duration::from_millis(50),
        }
    }
}
