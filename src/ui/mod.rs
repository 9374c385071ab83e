//! UI-Komponenten: Toolbar, Control-Panel, Status-Bar, Zeichenflächen-Input.

pub mod control_panel;
pub mod input;
pub mod status;
pub mod toolbar;

pub use control_panel::render_control_panel;
pub use input::{classify, ClassifiedClick, InputState, PointerSource, RawPointerEvent};
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
