//! Barycentric Explorer.
//!
//! Interaktive Auswahl von 2–4 Punkten auf einer Zeichenfläche:
//! baryzentrische Interpolation im Dreieck und Paar-Kanten im Viereck.

use barycentric_explorer::render::{render_scene, PainterSurface};
use barycentric_explorer::{ui, AppController, AppIntent, AppState, ExplorerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Barycentric Explorer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Barycentric Explorer"),
            ..Default::default()
        };

        eframe::run_native(
            "Barycentric Explorer",
            options,
            Box::new(|_cc| Ok(Box::new(ExplorerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ExplorerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ExplorerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ExplorerOptions::config_path();
        let explorer_options = ExplorerOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = explorer_options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        Self {
            state: AppState::with_options(explorer_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_control_panel(ctx, &mut self.state));
        self.process_events(events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                // Canvas-Events sofort verarbeiten, danach aus dem neuen Zustand zeichnen
                let canvas_events = self.input.collect_canvas_events(ui, &response);
                self.process_events(canvas_events);

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                let mut surface =
                    PainterSurface::new(&painter, rect, scene.options.canvas_background);
                render_scene(&scene, &mut surface);
            });
    }
}
