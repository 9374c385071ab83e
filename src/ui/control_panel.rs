//! Control-Panel (rechte Seitenleiste): Vertex-Labels, Gewichts-Slider, Koordinaten-Eingabe.

use crate::app::{AppIntent, AppState};
use crate::core::WeightKind;
use crate::render::to_color32;
use crate::shared::{palette_color, palette_name, vertex_name};

/// Rendert das Control-Panel und gibt erzeugte Events zurück.
///
/// Das Panel liest nur; Slider-Änderungen werden als `WeightEdited`-Intent
/// gemeldet und erst vom Controller normalisiert übernommen.
pub fn render_control_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("control_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Punkte");
            ui.separator();
            render_vertex_labels(ui, state);

            if let Some(weights) = state.mode.weights() {
                ui.separator();
                ui.heading("Gewichte");
                for kind in WeightKind::ALL {
                    let mut value = weights.get(kind);
                    let slider = egui::Slider::new(&mut value, 0.0..=1.0).text(kind.label());
                    if ui.add(slider).changed() {
                        events.push(AppIntent::WeightEdited {
                            weight: kind,
                            value,
                        });
                    }
                }
                ui.label(format!("Summe: {:.3}", weights.sum()));
            }

            ui.separator();
            render_point_input(ui, state, &mut events);
        });

    events
}

fn render_vertex_labels(ui: &mut egui::Ui, state: &AppState) {
    egui::Grid::new("vertex_labels")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (i, label) in state.labels().iter().enumerate() {
                let color = to_color32(palette_color(&state.options.palette, i));
                ui.colored_label(color, vertex_name(i))
                    .on_hover_text(palette_name(&state.options.palette, i));
                ui.label(label.as_str());
                ui.end_row();
            }
        });
}

fn render_point_input(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.label("Punkt eingeben (x,y,z):");
    ui.horizontal(|ui| {
        let response = ui.text_edit_singleline(&mut state.ui.point_input);
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (submitted || ui.button("Setzen").clicked()) && !state.ui.point_input.is_empty() {
            events.push(AppIntent::PointEntered {
                literal: std::mem::take(&mut state.ui.point_input),
            });
        }
    });
}
