use crate::app::modes::ModeKind;
use crate::core::{ClickKind, Point2D, WeightKind};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick/Touch auf der Zeichenfläche (flächenlokale Koordinaten)
    CanvasClicked { position: Point2D, kind: ClickKind },
    /// Koordinaten-Literal `x,y,z` im Control-Panel bestätigt
    PointEntered { literal: String },
    /// Gewichts-Slider wurde bewegt
    WeightEdited { weight: WeightKind, value: f64 },
    /// Interaktions-Modus wechseln
    ModeSwitchRequested { mode: ModeKind },
    /// Aktuellen Modus zurücksetzen
    ClearRequested,
    /// Anwendung beenden
    ExitRequested,
}
