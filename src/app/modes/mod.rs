//! Interaktions-Modi: Dreiecks-Interpolation und Viereck-Kanten.
//!
//! Jeder Modus besitzt seinen kompletten veränderlichen Zustand
//! (Punktauswahl, Labels, ggf. Gewichte und abgeleitete Punkte).
//! Mutation erfolgt ausschließlich über die Handler in `app::handlers`.

/// Baryzentrische Interpolation im Dreieck
pub mod barycentric;
/// Kanten zwischen bis zu vier freien Punkten
pub mod edges;
mod selection;

pub use barycentric::{BarycentricMode, WeightEditOutcome};
pub use edges::EdgeMode;
pub use selection::{PointSelection, NOT_SELECTED};

use crate::core::{Point2D, SelectionPhase, WeightTriple};

/// Art des aktiven Modus (für Moduswechsel und Anzeige).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeKind {
    /// Drei Punkte + Gewichts-Slider
    #[default]
    Barycentric,
    /// Bis zu vier Punkte, alle Paar-Kanten
    Edges,
}

impl ModeKind {
    /// Maximale Anzahl wählbarer Punkte.
    pub fn capacity(self) -> usize {
        match self {
            ModeKind::Barycentric => BarycentricMode::CAPACITY,
            ModeKind::Edges => EdgeMode::CAPACITY,
        }
    }

    /// Anzeigename für Toolbar und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Barycentric => "Baryzentrisch (Dreieck)",
            ModeKind::Edges => "Kanten (Viereck)",
        }
    }
}

/// Der aktive Modus mit seinem vollständigen Zustand.
#[derive(Debug, Clone)]
pub enum InteractionMode {
    Barycentric(BarycentricMode),
    Edges(EdgeMode),
}

impl InteractionMode {
    /// Erstellt einen frischen Modus der angegebenen Art.
    pub fn new(kind: ModeKind, initial_weights: WeightTriple) -> Self {
        match kind {
            ModeKind::Barycentric => Self::Barycentric(BarycentricMode::new(initial_weights)),
            ModeKind::Edges => Self::Edges(EdgeMode::new()),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Barycentric(_) => ModeKind::Barycentric,
            Self::Edges(_) => ModeKind::Edges,
        }
    }

    /// Read-only Sicht auf die Punktauswahl.
    pub fn selection(&self) -> &PointSelection {
        match self {
            Self::Barycentric(mode) => &mode.selection,
            Self::Edges(mode) => &mode.selection,
        }
    }

    /// Primärklick: Punkt anhängen oder letzten ersetzen.
    pub fn add_or_replace_point(&mut self, position: Point2D) {
        match self {
            Self::Barycentric(mode) => mode.add_or_replace_point(position),
            Self::Edges(mode) => mode.add_or_replace_point(position),
        }
    }

    /// Sekundär-/Mittelklick: letzten Punkt entfernen.
    pub fn remove_last_point(&mut self) -> Option<Point2D> {
        match self {
            Self::Barycentric(mode) => mode.remove_last_point(),
            Self::Edges(mode) => mode.remove_last_point(),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection().phase()
    }

    /// Abgeleitete Punkte (leer im Kanten-Modus).
    pub fn derived_points(&self) -> &[Point2D] {
        match self {
            Self::Barycentric(mode) => mode.derived_points(),
            Self::Edges(_) => &[],
        }
    }

    /// Gewichte, falls der Modus welche besitzt.
    pub fn weights(&self) -> Option<WeightTriple> {
        match self {
            Self::Barycentric(mode) => Some(mode.weights()),
            Self::Edges(_) => None,
        }
    }

    /// Ob Kanten zwischen allen Punktpaaren gezeichnet werden.
    pub fn draws_edges(&self) -> bool {
        matches!(self, Self::Edges(_))
    }
}
