//! Abgeleitete Punkte aus Dreiecks-Basis und baryzentrischen Gewichten.

use super::{Point2D, WeightTriple};

/// Affine Kombination `alpha·a + beta·b + gamma·c`.
///
/// Der Aufrufer stellt sicher, dass genau drei Basis-Punkte vorliegen.
pub fn derive_point(basis: &[Point2D; 3], weights: &WeightTriple) -> Point2D {
    basis[0] * weights.alpha() + basis[1] * weights.beta() + basis[2] * weights.gamma()
}
