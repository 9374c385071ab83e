//! Application State: aktiver Modus, Optionen, UI-Puffer.

use super::modes::{InteractionMode, ModeKind};
use super::CommandLog;
use crate::shared::ExplorerOptions;

/// UI-spezifische Eingabepuffer (nicht Teil des Domänenzustands).
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Inhalt des Koordinaten-Eingabefelds
    pub point_input: String,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Interaktions-Modus mit seinem kompletten Zustand
    pub mode: InteractionMode,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Startgewichte)
    pub options: ExplorerOptions,
    /// Hinweis für die Status-Bar (z.B. ungültiges Koordinaten-Literal)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen im Dreiecks-Modus
    pub fn new() -> Self {
        Self::with_options(ExplorerOptions::default())
    }

    /// Erstellt einen neuen App-State mit den angegebenen Optionen
    pub fn with_options(options: ExplorerOptions) -> Self {
        let mode = InteractionMode::new(ModeKind::default(), options.initial_weight_triple());
        Self {
            mode,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            status_message: None,
            should_exit: false,
        }
    }

    /// Art des aktiven Modus.
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Labels aller Vertex-Slots des aktiven Modus.
    pub fn labels(&self) -> &[String] {
        self.mode.selection().labels()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
