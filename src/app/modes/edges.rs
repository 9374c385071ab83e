use super::PointSelection;
use crate::core::Point2D;

/// Viereck-Kanten: bis zu vier freie Punkte, Kanten zwischen allen Paaren.
#[derive(Debug, Clone)]
pub struct EdgeMode {
    pub(crate) selection: PointSelection,
}

impl EdgeMode {
    /// Maximale Anzahl an Punkten.
    pub const CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self {
            selection: PointSelection::new(Self::CAPACITY),
        }
    }

    pub fn selection(&self) -> &PointSelection {
        &self.selection
    }

    pub(crate) fn add_or_replace_point(&mut self, position: Point2D) {
        self.selection.add_or_replace(position);
    }

    pub(crate) fn remove_last_point(&mut self) -> Option<Point2D> {
        self.selection.remove_last()
    }

    /// Anzahl der Kanten `n·(n-1)/2` für die aktuelle Auswahl.
    pub fn edge_count(&self) -> usize {
        let n = self.selection.len();
        n * n.saturating_sub(1) / 2
    }
}

impl Default for EdgeMode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::NOT_SELECTED;

    #[test]
    fn test_fifth_point_replaces_fourth() {
        let mut mode = EdgeMode::new();
        for i in 0..5 {
            mode.add_or_replace_point(Point2D::new(i as f64 * 10.0, 0.0));
        }
        assert_eq!(mode.selection().len(), 4);
        assert_eq!(mode.selection().points()[3], Point2D::new(40.0, 0.0));
        assert_eq!(mode.edge_count(), 6);
    }

    #[test]
    fn test_remove_reduces_edges_and_resets_label() {
        let mut mode = EdgeMode::new();
        for i in 0..4 {
            mode.add_or_replace_point(Point2D::new(i as f64, i as f64));
        }
        mode.remove_last_point();
        assert_eq!(mode.edge_count(), 3);
        assert_eq!(mode.selection().labels()[3], NOT_SELECTED);
        assert_eq!(mode.selection().labels()[2], "(2,2)");
    }

    #[test]
    fn test_edge_count_for_small_selections() {
        let mut mode = EdgeMode::new();
        assert_eq!(mode.edge_count(), 0);
        mode.add_or_replace_point(Point2D::ZERO);
        assert_eq!(mode.edge_count(), 0);
        mode.add_or_replace_point(Point2D::ONE);
        assert_eq!(mode.edge_count(), 1);
    }
}
