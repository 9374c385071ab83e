//! Zeichnen der Szene über einen abstrakten Draw-Command-Sink.
//!
//! `render_scene` ist zustandslos und kennt nur das `DrawSurface`-Trait;
//! `PainterSurface` bildet es auf einen egui-Painter ab, `RecordingSurface`
//! zeichnet die Commands für Tests und Benchmarks auf.

mod painter;
mod scene_renderer;
mod surface;

pub use crate::shared::RenderScene;
pub use painter::PainterSurface;
pub(crate) use painter::to_color32;
pub use scene_renderer::render_scene;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
