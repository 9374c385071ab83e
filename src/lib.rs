//! Barycentric Explorer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionMode, ModeKind, UiState,
};
pub use core::{
    clamp_difference, derive_point, BoundedPointList, ClickKind, Point2D, SelectionPhase,
    WeightKind, WeightTriple,
};
pub use render::{render_scene, DrawCommand, DrawSurface, RecordingSurface};
pub use shared::{ExplorerOptions, RenderScene};
