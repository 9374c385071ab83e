//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod palette;
mod render_scene;

pub use options::ExplorerOptions;
pub use palette::{palette_color, palette_name, Rgba, PLOT_COLORS};
pub use render_scene::{vertex_name, RenderScene};
