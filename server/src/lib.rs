//! # Sidebar Server
//! Keeps a sidebar scoreboard per viewer and synchronizes each viewer's
//! rendered copy with it, refreshing titles, rows and animations on a
//! fixed tick.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use sidebar_shared::{
        Animation, Body, Capabilities, ChatColor, Component, EncodedPacket, Line,
        ProtocolGeneration, RenderableText, ScoreboardModel, Title, MAX_LINES,
    };
}

mod adapter;
mod error;
mod registry;
mod scheduler;
mod server;
mod session;
mod viewer;

pub use adapter::{BoardAdapter, RefreshHook};
pub use error::{BoardError, TransportError};
pub use scheduler::TickScheduler;
pub use server::{BoardServer, ServerConfig};
pub use session::{Session, SessionId, SessionState, SharedSession};
pub use viewer::{Viewer, ViewerId};
