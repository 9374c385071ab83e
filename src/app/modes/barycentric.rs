use super::PointSelection;
use crate::core::{derive_point, Point2D, WeightKind, WeightTriple};

/// Ergebnis einer Gewichts-Änderung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightEditOutcome {
    /// Neuer abgeleiteter Punkt wurde angehängt
    Derived(Point2D),
    /// Gewichte übernommen, aber noch keine Dreiecks-Basis vorhanden
    NoBasis,
}

/// Dreiecks-Interpolation: drei Punkte, drei Gewichte, abgeleitete Punkte.
#[derive(Debug, Clone)]
pub struct BarycentricMode {
    pub(crate) selection: PointSelection,
    weights: WeightTriple,
    derived: Vec<Point2D>,
}

impl BarycentricMode {
    /// Anzahl der Dreiecks-Vertices.
    pub const CAPACITY: usize = 3;

    pub fn new(weights: WeightTriple) -> Self {
        Self {
            selection: PointSelection::new(Self::CAPACITY),
            weights,
            derived: Vec::new(),
        }
    }

    pub fn selection(&self) -> &PointSelection {
        &self.selection
    }

    pub fn weights(&self) -> WeightTriple {
        self.weights
    }

    pub fn derived_points(&self) -> &[Point2D] {
        &self.derived
    }

    pub(crate) fn add_or_replace_point(&mut self, position: Point2D) {
        self.selection.add_or_replace(position);
        self.drop_derived_without_basis();
    }

    pub(crate) fn remove_last_point(&mut self) -> Option<Point2D> {
        let removed = self.selection.remove_last();
        self.drop_derived_without_basis();
        removed
    }

    /// Übernimmt ein bearbeitetes Gewicht (normalisiert) und hängt bei
    /// vollständigem Dreieck einen neuen abgeleiteten Punkt an.
    pub(crate) fn edit_weight(&mut self, kind: WeightKind, value: f64) -> WeightEditOutcome {
        self.weights = self.weights.with_edit(kind, value);
        match self.selection.list().basis() {
            Some(basis) => {
                let point = derive_point(&basis, &self.weights);
                self.derived.push(point);
                WeightEditOutcome::Derived(point)
            }
            None => WeightEditOutcome::NoBasis,
        }
    }

    // Ohne Dreieck fehlt den abgeleiteten Punkten die Basis
    fn drop_derived_without_basis(&mut self) {
        if !self.selection.list().has_basis() {
            self.derived.clear();
        }
    }
}

#[cfg(test)]
mod tests;
