//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ExplorerOptions;
use crate::core::Point2D;

/// Read-only Daten für einen Render-Durchlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Gewählte Vertices in Auswahl-Reihenfolge
    pub vertices: Vec<Point2D>,
    /// Abgeleitete Punkte (nur im Interpolations-Modus befüllt)
    pub derived_points: Vec<Point2D>,
    /// Kanten zwischen allen Vertex-Paaren zeichnen (Viereck-Modus)
    pub draw_edges: bool,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ExplorerOptions,
}

impl RenderScene {
    /// Alle Index-Paare `(i, j)` mit `i < j` über die aktuellen Vertices.
    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        if !self.draw_edges {
            return Vec::new();
        }
        let n = self.vertices.len();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect()
    }
}

/// Buchstaben-Label eines Vertex: `a`, `b`, `c`, `d`, …
pub fn vertex_name(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    letter.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(n: usize, draw_edges: bool) -> RenderScene {
        RenderScene {
            vertices: (0..n).map(|i| Point2D::new(i as f64, 0.0)).collect(),
            derived_points: Vec::new(),
            draw_edges,
            options: ExplorerOptions::default(),
        }
    }

    #[test]
    fn test_edge_pairs_grow_combinatorially() {
        assert_eq!(scene_with(0, true).edge_pairs().len(), 0);
        assert_eq!(scene_with(1, true).edge_pairs().len(), 0);
        assert_eq!(scene_with(2, true).edge_pairs().len(), 1);
        assert_eq!(scene_with(3, true).edge_pairs().len(), 3);
        assert_eq!(scene_with(4, true).edge_pairs().len(), 6);
        assert_eq!(
            scene_with(3, true).edge_pairs(),
            vec![(0, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_no_edges_without_edge_mode() {
        assert!(scene_with(4, false).edge_pairs().is_empty());
    }

    #[test]
    fn test_vertex_names() {
        assert_eq!(vertex_name(0), "a");
        assert_eq!(vertex_name(3), "d");
    }
}
