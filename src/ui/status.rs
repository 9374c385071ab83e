//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::{vector_to_string, SelectionPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Modus: {}", state.mode_kind().label()));
            ui.separator();

            let capacity = state.mode_kind().capacity();
            let phase = match state.mode.phase() {
                SelectionPhase::Empty => format!("Punkte: 0/{}", capacity),
                SelectionPhase::Partial(n) => format!("Punkte: {}/{}", n, capacity),
                SelectionPhase::Complete => format!("Punkte: {0}/{0} (vollständig)", capacity),
            };
            ui.label(phase);

            if let Some(weights) = state.mode.weights() {
                ui.separator();
                let [a, b, c] = weights.to_array();
                ui.label(format!("α={:.2} β={:.2} γ={:.2}", a, b, c));
                ui.separator();
                let derived = state.mode.derived_points();
                ui.label(format!("Innere Punkte: {}", derived.len()));
                if let Some(last) = derived.last() {
                    ui.label(format!("Letzter: ({})", vector_to_string(&[last.x, last.y], None)));
                }
            }

            if let Some(message) = &state.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(255, 140, 0), message);
            }
        });
    });
}
