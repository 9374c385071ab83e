use crate::app::modes::ModeKind;
use crate::core::{Point2D, WeightKind};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt anhängen bzw. letzten Punkt ersetzen
    AddOrReplacePoint { position: Point2D },
    /// Letzten Punkt entfernen (No-op bei leerer Auswahl)
    RemoveLastPoint,
    /// Gewicht setzen, Nachbarn normalisieren, ggf. Punkt ableiten
    ApplyWeightEdit { weight: WeightKind, value: f64 },
    /// Hinweis in der Status-Bar setzen oder entfernen
    SetStatusMessage { message: Option<String> },
    /// Frischen Modus der angegebenen Art aktivieren
    SwitchMode { mode: ModeKind },
    /// Aktuellen Modus auf Anfangszustand setzen
    ResetMode,
    /// Anwendung beenden
    RequestExit,
}
