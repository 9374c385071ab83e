//! Core-Domänentypen: Punkte, Punktlisten, Gewichte, Interpolation, Vektor-Literale.
//!
//! Alles in diesem Modul ist UI-frei und rein funktional bzw. lokal mutierend.

pub mod click;
pub mod interpolation;
/// Begrenzte, geordnete Punktliste mit Add/Replace/Remove-Semantik
pub mod point_list;
pub mod vector_literal;
pub mod weights;

pub use click::ClickKind;
pub use interpolation::derive_point;
pub use point_list::{BoundedPointList, Point2D, SelectionPhase, MIN_BASIS_POINTS};
pub use vector_literal::{format_label, parse_vector_literal, vector_to_string, ParsedVector};
pub use weights::{clamp_difference, ClampedWeights, WeightKind, WeightTriple};
