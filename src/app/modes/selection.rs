//! Gemeinsame Punktauswahl inklusive Anzeige-Labels.

use crate::core::{format_label, BoundedPointList, Point2D, SelectionPhase};

/// Label eines noch nicht gewählten Vertex-Slots.
pub const NOT_SELECTED: &str = "Not Selected";

/// Punktliste plus die daraus abgeleiteten Labels (ein Slot pro Kapazitätsplatz).
///
/// Labels werden nach jeder Änderung vollständig neu berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSelection {
    points: BoundedPointList,
    labels: Vec<String>,
}

impl PointSelection {
    pub fn new(capacity: usize) -> Self {
        let mut selection = Self {
            points: BoundedPointList::new(capacity),
            labels: Vec::with_capacity(capacity),
        };
        selection.refresh_labels();
        selection
    }

    pub(crate) fn add_or_replace(&mut self, position: Point2D) {
        self.points.add_or_replace(position);
        self.refresh_labels();
    }

    pub(crate) fn remove_last(&mut self) -> Option<Point2D> {
        let removed = self.points.remove_last();
        self.refresh_labels();
        removed
    }

    fn refresh_labels(&mut self) {
        self.labels = (0..self.points.capacity())
            .map(|i| match self.points.get(i) {
                Some(p) => format_label(p),
                None => NOT_SELECTED.to_string(),
            })
            .collect();
    }

    pub fn points(&self) -> &[Point2D] {
        self.points.points()
    }

    pub fn list(&self) -> &BoundedPointList {
        &self.points
    }

    /// Labels aller Slots, Länge = Kapazität.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.points.phase()
    }
}
