//! Handler für Moduswechsel, Status-Hinweise und Programmende.

use crate::app::modes::{InteractionMode, ModeKind};
use crate::app::AppState;

/// Aktiviert einen frischen Modus der angegebenen Art.
pub fn switch_mode(state: &mut AppState, mode: ModeKind) {
    state.mode = InteractionMode::new(mode, state.options.initial_weight_triple());
    log::info!("Modus gewechselt: {}", mode.label());
}

/// Setzt den aktiven Modus auf den Anfangszustand zurück.
pub fn reset_mode(state: &mut AppState) {
    let kind = state.mode.kind();
    state.mode = InteractionMode::new(kind, state.options.initial_weight_triple());
    log::info!("Modus zurückgesetzt: {}", kind.label());
}

/// Setzt oder entfernt den Status-Hinweis.
pub fn set_status_message(state: &mut AppState, message: Option<String>) {
    state.status_message = message;
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
