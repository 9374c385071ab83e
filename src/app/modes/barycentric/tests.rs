use super::*;
use crate::core::SelectionPhase;
use approx::assert_abs_diff_eq;

fn triangle_mode(weights: WeightTriple) -> BarycentricMode {
    let mut mode = BarycentricMode::new(weights);
    mode.add_or_replace_point(Point2D::new(0.0, 0.0));
    mode.add_or_replace_point(Point2D::new(100.0, 0.0));
    mode.add_or_replace_point(Point2D::new(0.0, 100.0));
    mode
}

#[test]
fn test_weight_edit_without_basis_stores_weights_only() {
    let mut mode = BarycentricMode::new(WeightTriple::default());
    mode.add_or_replace_point(Point2D::new(1.0, 1.0));

    let outcome = mode.edit_weight(WeightKind::Alpha, 0.5);
    assert_eq!(outcome, WeightEditOutcome::NoBasis);
    assert_eq!(mode.weights().alpha(), 0.5);
    assert_abs_diff_eq!(mode.weights().sum(), 1.0, epsilon = 1e-9);
    assert!(mode.derived_points().is_empty());
}

#[test]
fn test_weight_edit_with_triangle_derives_point() {
    let weights = WeightTriple::try_new(0.5, 0.3, 0.2).expect("gültige Gewichte");
    let mut mode = triangle_mode(weights);

    // Gleicher Wert → keine Korrektur nötig, Punkt bei (30, 20)
    let outcome = mode.edit_weight(WeightKind::Alpha, 0.5);
    let WeightEditOutcome::Derived(p) = outcome else {
        panic!("Abgeleiteter Punkt erwartet, erhalten: {outcome:?}");
    };
    assert_abs_diff_eq!(p.x, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 20.0, epsilon = 1e-9);

    // alpha → 0.9: gleichmäßige Aufteilung, beta ≈ 0.1, gamma ≈ 0
    let outcome = mode.edit_weight(WeightKind::Alpha, 0.9);
    let WeightEditOutcome::Derived(p) = outcome else {
        panic!("Abgeleiteter Punkt erwartet, erhalten: {outcome:?}");
    };
    assert_abs_diff_eq!(p.x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
    assert_eq!(mode.derived_points().len(), 2);
}

#[test]
fn test_removing_vertex_clears_derived_points() {
    let mut mode = triangle_mode(WeightTriple::default());
    mode.edit_weight(WeightKind::Beta, 0.5);
    mode.edit_weight(WeightKind::Gamma, 0.2);
    assert_eq!(mode.derived_points().len(), 2);

    mode.remove_last_point();
    assert_eq!(mode.selection().phase(), SelectionPhase::Partial(2));
    assert!(mode.derived_points().is_empty());

    // Ohne Basis entsteht auch nach erneuter Änderung kein Punkt
    assert_eq!(
        mode.edit_weight(WeightKind::Beta, 0.1),
        WeightEditOutcome::NoBasis
    );
    assert!(mode.derived_points().is_empty());
}

#[test]
fn test_replacing_third_vertex_keeps_derived_points() {
    let mut mode = triangle_mode(WeightTriple::default());
    mode.edit_weight(WeightKind::Alpha, 0.4);
    mode.add_or_replace_point(Point2D::new(50.0, 50.0));

    assert_eq!(mode.selection().len(), 3);
    assert_eq!(mode.selection().points()[2], Point2D::new(50.0, 50.0));
    assert_eq!(mode.derived_points().len(), 1);
}
