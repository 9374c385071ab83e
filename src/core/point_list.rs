use glam::DVec2;

/// 2D-Punkt auf der Zeichenfläche (Pixel, Ursprung oben links, y nach unten).
pub type Point2D = DVec2;

/// Mindestanzahl an Punkten, ab der abgeleitete Geometrie existiert.
pub const MIN_BASIS_POINTS: usize = 3;

/// Expliziter Zustand einer Punktliste, abgeleitet aus ihrer Länge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Kein Punkt gewählt
    Empty,
    /// Einige, aber nicht alle Punkte gewählt
    Partial(usize),
    /// Kapazität erreicht
    Complete,
}

/// Geordnete Liste von höchstens `capacity` Punkten.
///
/// Punkte werden nie in-place verändert, nur angehängt, ersetzt oder entfernt.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedPointList {
    points: Vec<Point2D>,
    capacity: usize,
}

impl BoundedPointList {
    /// Erstellt eine leere Liste mit fester Kapazität.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt `point` an oder ersetzt den letzten Punkt, wenn die Liste voll ist.
    pub fn add_or_replace(&mut self, point: Point2D) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else if let Some(last) = self.points.last_mut() {
            *last = point;
        }
    }

    /// Entfernt den letzten Punkt. No-op bei leerer Liste.
    pub fn remove_last(&mut self) -> Option<Point2D> {
        self.points.pop()
    }

    /// Leert die Liste.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read-only Sicht auf alle Punkte in Auswahl-Reihenfolge.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// `true`, sobald genug Punkte für ein Dreieck vorhanden sind.
    pub fn has_basis(&self) -> bool {
        self.points.len() >= MIN_BASIS_POINTS
    }

    /// Die ersten drei Punkte als Dreiecks-Basis (None bei < 3 Punkten).
    pub fn basis(&self) -> Option<[Point2D; 3]> {
        match self.points.as_slice() {
            [a, b, c, ..] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.points.len() {
            0 => SelectionPhase::Empty,
            n if n >= self.capacity => SelectionPhase::Complete,
            n => SelectionPhase::Partial(n),
        }
    }
}
