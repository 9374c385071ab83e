//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::parse_vector_literal;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { position, kind } => {
            if kind.adds_point() {
                vec![AppCommand::AddOrReplacePoint { position }]
            } else {
                vec![AppCommand::RemoveLastPoint]
            }
        }
        AppIntent::PointEntered { literal } => {
            let parsed = parse_vector_literal(&literal);
            let mut commands = vec![AppCommand::SetStatusMessage {
                message: parsed.warning.clone(),
            }];
            match parsed.planar_point() {
                Some(position) => commands.push(AppCommand::AddOrReplacePoint { position }),
                None => log::warn!("Literal {:?} ergibt keinen gültigen Punkt", literal),
            }
            commands
        }
        AppIntent::WeightEdited { weight, value } => {
            if state.mode.weights().is_some() {
                vec![AppCommand::ApplyWeightEdit { weight, value }]
            } else {
                log::debug!("Gewichts-Änderung ohne Gewichts-Modus ignoriert");
                Vec::new()
            }
        }
        AppIntent::ModeSwitchRequested { mode } => vec![
            AppCommand::SwitchMode { mode },
            AppCommand::SetStatusMessage { message: None },
        ],
        AppIntent::ClearRequested => vec![
            AppCommand::ResetMode,
            AppCommand::SetStatusMessage { message: None },
        ],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
