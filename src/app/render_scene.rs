//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        vertices: state.mode.selection().points().to_vec(),
        derived_points: state.mode.derived_points().to_vec(),
        draw_edges: state.mode.draws_edges(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::modes::{InteractionMode, ModeKind};
    use crate::app::AppState;
    use crate::core::{Point2D, WeightTriple};

    #[test]
    fn build_reflects_barycentric_mode() {
        let mut state = AppState::new();
        state.mode.add_or_replace_point(Point2D::new(1.0, 2.0));

        let scene = build(&state);
        assert_eq!(scene.vertices, vec![Point2D::new(1.0, 2.0)]);
        assert!(!scene.draw_edges);
        assert!(scene.derived_points.is_empty());
    }

    #[test]
    fn build_enables_edges_in_edge_mode() {
        let mut state = AppState::new();
        state.mode = InteractionMode::new(ModeKind::Edges, WeightTriple::default());
        state.mode.add_or_replace_point(Point2D::ZERO);
        state.mode.add_or_replace_point(Point2D::ONE);

        let scene = build(&state);
        assert!(scene.draw_edges);
        assert_eq!(scene.edge_pairs(), vec![(0, 1)]);
    }
}
