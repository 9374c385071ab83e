//! Parsen und Formatieren von Koordinaten-Literalen (`x,y,z`).

use super::Point2D;
use glam::DVec3;

/// Warnung bei falscher Komponentenanzahl.
pub const VECTOR_COMPONENT_WARNING: &str = "Must have 3 comma-separated coordinates in a vector!";

/// Standard-Nachkommastellen für [`vector_to_string`].
pub const DEFAULT_VECTOR_DECIMALS: usize = 2;

/// Ergebnis von [`parse_vector_literal`]: bestmöglicher Wert plus optionale Warnung.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVector {
    /// Fehlende oder ungültige Komponenten sind `NaN`
    pub value: DVec3,
    /// Gesetzt, wenn das Literal nicht genau drei Komponenten hat
    pub warning: Option<String>,
}

impl ParsedVector {
    /// Die x/y-Komponenten als Punkt, falls beide endlich sind.
    pub fn planar_point(&self) -> Option<Point2D> {
        let p = self.value.truncate();
        p.is_finite().then_some(p)
    }
}

/// Parst ein kommagetrenntes Literal `x,y,z` in einen 3D-Vektor.
///
/// Schlägt nie fehl: bei falscher Komponentenanzahl wird eine Warnung
/// geliefert und ein bestmöglicher Wert zurückgegeben.
pub fn parse_vector_literal(s: &str) -> ParsedVector {
    let components: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().unwrap_or(f64::NAN))
        .collect();

    let warning = if components.len() != 3 {
        log::warn!("{} (erhalten: {:?})", VECTOR_COMPONENT_WARNING, s);
        Some(VECTOR_COMPONENT_WARNING.to_string())
    } else {
        None
    };

    let component = |i: usize| components.get(i).copied().unwrap_or(f64::NAN);
    ParsedVector {
        value: DVec3::new(component(0), component(1), component(2)),
        warning,
    }
}

/// Formatiert Werte als kommagetrennte Liste mit `decimals` Nachkommastellen (Standard 2).
pub fn vector_to_string(values: &[f64], decimals: Option<usize>) -> String {
    let decimals = decimals.unwrap_or(DEFAULT_VECTOR_DECIMALS);
    values
        .iter()
        .map(|v| format!("{:.*}", decimals, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Anzeige-Label eines gewählten Punkts: `(x,y)` ohne Nachkommastellen.
///
/// Halbe Werte runden von Null weg (`2.5` → `3`), nicht zur geraden Zahl.
pub fn format_label(point: Point2D) -> String {
    format!("({},{})", point.x.round(), point.y.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_literal() {
        let parsed = parse_vector_literal("1.5, -2,3");
        assert_eq!(parsed.value, DVec3::new(1.5, -2.0, 3.0));
        assert!(parsed.warning.is_none());
        assert_eq!(parsed.planar_point(), Some(Point2D::new(1.5, -2.0)));
    }

    #[test]
    fn test_parse_too_few_components_warns_best_effort() {
        let parsed = parse_vector_literal("4,5");
        assert_eq!(parsed.warning.as_deref(), Some(VECTOR_COMPONENT_WARNING));
        assert_eq!(parsed.value.x, 4.0);
        assert_eq!(parsed.value.y, 5.0);
        assert!(parsed.value.z.is_nan());
        assert_eq!(parsed.planar_point(), Some(Point2D::new(4.0, 5.0)));
    }

    #[test]
    fn test_parse_too_many_components_ignores_extras() {
        let parsed = parse_vector_literal("1,2,3,4");
        assert!(parsed.warning.is_some());
        assert_eq!(parsed.value, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_garbage_has_no_planar_point() {
        let parsed = parse_vector_literal("abc");
        assert!(parsed.warning.is_some());
        assert!(parsed.planar_point().is_none());
    }

    #[test]
    fn test_vector_to_string_default_and_custom_decimals() {
        assert_eq!(vector_to_string(&[1.0, 2.5, -3.25], None), "1.00,2.50,-3.25");
        assert_eq!(vector_to_string(&[1.0, 2.0], Some(0)), "1,2");
        assert_eq!(vector_to_string(&[], None), "");
    }

    #[test]
    fn test_format_label_rounds_to_integer() {
        assert_eq!(format_label(Point2D::new(100.0, 0.0)), "(100,0)");
        assert_eq!(format_label(Point2D::new(12.4, 7.8)), "(12,8)");
    }

    #[test]
    fn test_format_label_rounds_half_away_from_zero() {
        assert_eq!(format_label(Point2D::new(2.5, 100.5)), "(3,101)");
        assert_eq!(format_label(Point2D::new(-0.5, 0.5)), "(-1,1)");
        assert_eq!(format_label(Point2D::new(-2.5, 3.5)), "(-3,4)");
    }
}
