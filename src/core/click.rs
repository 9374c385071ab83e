//! Logische Klick-Arten (unabhängig von Maus/Touch).

/// Logische Klassifikation eines Zeiger-Ereignisses.
///
/// Touch-Eingaben sind immer `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickKind {
    /// Linksklick oder Touch
    #[default]
    Primary,
    /// Rechtsklick
    Secondary,
    /// Mittelklick
    Auxiliary,
}

impl ClickKind {
    /// Gibt `true` zurück, wenn der Klick einen Punkt hinzufügt bzw. ersetzt.
    ///
    /// Jeder Nicht-Primärklick entfernt stattdessen den letzten Punkt.
    pub fn adds_point(self) -> bool {
        matches!(self, ClickKind::Primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_primary_adds_point() {
        assert!(ClickKind::Primary.adds_point());
        assert!(!ClickKind::Secondary.adds_point());
        assert!(!ClickKind::Auxiliary.adds_point());
    }
}
