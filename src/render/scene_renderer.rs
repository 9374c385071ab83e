//! Zustandsloser Szenen-Renderer.

use super::DrawSurface;
use crate::core::Point2D;
use crate::shared::{palette_color, vertex_name, RenderScene, Rgba};

/// Zeichnet die komplette Szene: Vertices mit Labels, Kanten, abgeleitete Punkte.
///
/// Gleiche Szene ergibt immer dieselbe Befehlsfolge.
pub fn render_scene(scene: &RenderScene, surface: &mut impl DrawSurface) {
    let opts = &scene.options;
    surface.clear();

    for (i, vertex) in scene.vertices.iter().enumerate() {
        let color = palette_color(&opts.palette, i);
        fill_square(surface, *vertex, opts.vertex_half_size, color);
        surface.draw_text(
            &vertex_name(i),
            vertex.x + opts.label_offset_x,
            vertex.y,
            opts.label_font_size,
            color,
        );
    }

    for (i, j) in scene.edge_pairs() {
        let (a, b) = (scene.vertices[i], scene.vertices[j]);
        surface.draw_line(a.x, a.y, b.x, b.y, opts.edge_color);
    }

    for point in &scene.derived_points {
        fill_square(
            surface,
            *point,
            opts.derived_half_size,
            opts.derived_point_color,
        );
    }
}

/// Quadrat der Kantenlänge `2h + 1` um `center`.
fn fill_square(surface: &mut impl DrawSurface, center: Point2D, half: f64, color: Rgba) {
    surface.fill_rect(
        center.x - half,
        center.y - half,
        half * 2.0 + 1.0,
        half * 2.0 + 1.0,
        color,
    );
}
