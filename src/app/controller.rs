//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Fehler bei nicht-endlichen Positionen oder Gewichten; der Zustand bleibt
    /// dann unverändert, der Command ist trotzdem protokolliert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Punktauswahl ===
            AppCommand::AddOrReplacePoint { position } => {
                handlers::selection::add_or_replace_point(state, position)?
            }
            AppCommand::RemoveLastPoint => handlers::selection::remove_last_point(state),

            // === Gewichte ===
            AppCommand::ApplyWeightEdit { weight, value } => {
                handlers::weights::apply_edit(state, weight, value)?
            }

            // === Modus & Status ===
            AppCommand::SwitchMode { mode } => handlers::view::switch_mode(state, mode),
            AppCommand::ResetMode => handlers::view::reset_mode(state),
            AppCommand::SetStatusMessage { message } => {
                handlers::view::set_status_message(state, message)
            }
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Zustand.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
