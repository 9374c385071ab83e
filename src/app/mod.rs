//! Application-Layer: Controller, State, Events, Modi und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod modes;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (aktiver Modus, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use modes::{InteractionMode, ModeKind};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, UiState};
