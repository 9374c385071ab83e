//! Toolbar für Moduswahl und Zurücksetzen.

use crate::app::{AppIntent, AppState, ModeKind};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.mode_kind();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for mode in [ModeKind::Barycentric, ModeKind::Edges] {
                if ui
                    .add(egui::Button::new(mode.label()).selected(active == mode))
                    .clicked()
                    && active != mode
                {
                    events.push(AppIntent::ModeSwitchRequested { mode });
                }
            }

            ui.separator();

            if ui.button("Zurücksetzen").clicked() {
                events.push(AppIntent::ClearRequested);
            }
            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });
    });

    events
}
