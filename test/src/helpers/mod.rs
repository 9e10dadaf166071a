pub mod assertions;

pub use client_view::{ClientTeam, ClientView};
pub use recording_viewer::RecordingViewer;
pub use scripted_adapter::ScriptedAdapter;
