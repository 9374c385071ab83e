//! Handler für Gewichts-Änderungen im Dreiecks-Modus.

use crate::app::modes::{InteractionMode, WeightEditOutcome};
use crate::app::AppState;
use crate::core::WeightKind;

/// Hinweis, wenn Gewichte vor der Dreiecks-Auswahl geändert werden.
pub const MISSING_BASIS_MESSAGE: &str = "Must select 3 points on the triangle first";

/// Übernimmt ein bearbeitetes Gewicht und leitet ggf. einen neuen Punkt ab.
///
/// Nicht-endliche Werte werden abgelehnt, die Gewichte bleiben unverändert.
pub fn apply_edit(state: &mut AppState, weight: WeightKind, value: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        value.is_finite(),
        "Ungültiger Wert für {}: {}",
        weight.label(),
        value
    );
    let InteractionMode::Barycentric(mode) = &mut state.mode else {
        log::debug!("Gewichts-Änderung ohne Gewichts-Modus ignoriert");
        return Ok(());
    };

    match mode.edit_weight(weight, value) {
        WeightEditOutcome::Derived(point) => {
            log::debug!(
                "{} = {:.3} → abgeleiteter Punkt ({:.2}, {:.2})",
                weight.label(),
                value,
                point.x,
                point.y
            );
            state.status_message = None;
        }
        WeightEditOutcome::NoBasis => {
            log::warn!("{}", MISSING_BASIS_MESSAGE);
            state.status_message = Some(MISSING_BASIS_MESSAGE.to_string());
        }
    }

    Ok(())
}
