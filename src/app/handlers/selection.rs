//! Handler für die Punktauswahl auf der Zeichenfläche.

use crate::app::AppState;
use crate::core::Point2D;

/// Hängt einen Punkt an bzw. ersetzt den letzten bei voller Auswahl.
///
/// Nicht-endliche Positionen werden abgelehnt, die Auswahl bleibt unverändert.
pub fn add_or_replace_point(state: &mut AppState, position: Point2D) -> anyhow::Result<()> {
    anyhow::ensure!(
        position.is_finite(),
        "Ungültige Punktposition ({}, {})",
        position.x,
        position.y
    );
    state.mode.add_or_replace_point(position);
    log::debug!(
        "Punkt ({:.1}, {:.1}) gewählt, Phase: {:?}",
        position.x,
        position.y,
        state.mode.phase()
    );
    Ok(())
}

/// Entfernt den letzten Punkt. Leere Auswahl bleibt unverändert.
pub fn remove_last_point(state: &mut AppState) {
    match state.mode.remove_last_point() {
        Some(removed) => log::debug!(
            "Punkt ({:.1}, {:.1}) entfernt, Phase: {:?}",
            removed.x,
            removed.y,
            state.mode.phase()
        ),
        None => log::debug!("Entfernen bei leerer Auswahl ignoriert"),
    }
}
