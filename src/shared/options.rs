//! Zentrale Konfiguration für den Barycentric Explorer.
//!
//! `ExplorerOptions` wird einmal beim Start geladen und danach nur gelesen.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::palette::{Rgba, BLACK, PLOT_COLORS, WHITE};
use crate::core::weights::DEFAULT_WEIGHTS;
use crate::core::WeightTriple;
use serde::{Deserialize, Serialize};

// ── Vertices ────────────────────────────────────────────────────────

/// Halbe Kantenlänge der Vertex-Quadrate in Pixeln.
pub const VERTEX_HALF_SIZE: f64 = 5.0;
/// Horizontaler Abstand des Vertex-Labels rechts vom Punkt.
pub const LABEL_OFFSET_X: f64 = 10.0;
/// Schriftgröße der Vertex-Labels in Pixeln.
pub const LABEL_FONT_SIZE: f32 = 16.0;

// ── Abgeleitete Punkte ─────────────────────────────────────────────

/// Halbe Kantenlänge der abgeleiteten Punkte in Pixeln.
pub const DERIVED_HALF_SIZE: f64 = 1.0;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "barycentric_explorer.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einstellbaren Optionen.
/// Wird als `barycentric_explorer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerOptions {
    /// Halbe Kantenlänge der Vertex-Quadrate (gezeichnet mit `2h + 1`)
    pub vertex_half_size: f64,
    /// Halbe Kantenlänge der abgeleiteten Punkte
    pub derived_half_size: f64,
    /// Label-Versatz nach rechts
    pub label_offset_x: f64,
    /// Schriftgröße der Labels
    pub label_font_size: f32,
    /// Farbtabelle C0..C5, per Index modulo Größe verwendet
    pub palette: Vec<Rgba>,
    /// Farbe der abgeleiteten Punkte
    pub derived_point_color: Rgba,
    /// Farbe der Kanten im Viereck-Modus
    pub edge_color: Rgba,
    /// Hintergrundfarbe der Zeichenfläche
    pub canvas_background: Rgba,
    /// Startgewichte `[alpha, beta, gamma]`
    pub initial_weights: [f64; 3],
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            vertex_half_size: VERTEX_HALF_SIZE,
            derived_half_size: DERIVED_HALF_SIZE,
            label_offset_x: LABEL_OFFSET_X,
            label_font_size: LABEL_FONT_SIZE,
            palette: PLOT_COLORS.to_vec(),
            derived_point_color: BLACK,
            edge_color: BLACK,
            canvas_background: WHITE,
            initial_weights: DEFAULT_WEIGHTS,
        }
    }
}

impl ExplorerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("barycentric_explorer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Startgewichte als validiertes Tripel.
    ///
    /// Ungültige Werte aus der Datei fallen auf die Standardgewichte zurück.
    pub fn initial_weight_triple(&self) -> WeightTriple {
        let [alpha, beta, gamma] = self.initial_weights;
        WeightTriple::try_new(alpha, beta, gamma).unwrap_or_else(|e| {
            log::warn!("Ungültige Startgewichte, verwende Standard: {:#}", e);
            WeightTriple::default()
        })
    }
}
