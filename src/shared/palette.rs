//! Feste, geordnete Farbtabelle `C0..C5` für Vertices und Kanten.

/// RGBA-Farbe mit Komponenten in [0, 1].
pub type Rgba = [f32; 4];

/// Standard-Palette (C0 = #0066ff, C1 = #ff9933, C2 = #33cc33,
/// C3 = #cc00ff, C4 = #ff3300, C5 = #996633).
pub const PLOT_COLORS: [Rgba; 6] = [
    [0.0, 0.4, 1.0, 1.0],
    [1.0, 0.6, 0.2, 1.0],
    [0.2, 0.8, 0.2, 1.0],
    [0.8, 0.0, 1.0, 1.0],
    [1.0, 0.2, 0.0, 1.0],
    [0.6, 0.4, 0.2, 1.0],
];

/// Schwarz (abgeleitete Punkte, Kanten)
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
/// Weiß (Hintergrund der Zeichenfläche)
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Farbe für Index `index` (modulo Tabellengröße).
///
/// Eine leere Tabelle fällt auf [`PLOT_COLORS`] zurück.
pub fn palette_color(palette: &[Rgba], index: usize) -> Rgba {
    let table = if palette.is_empty() {
        &PLOT_COLORS[..]
    } else {
        palette
    };
    table[index % table.len()]
}

/// Name `C<n>` der Palettenfarbe für Index `index`.
pub fn palette_name(palette: &[Rgba], index: usize) -> String {
    let len = if palette.is_empty() {
        PLOT_COLORS.len()
    } else {
        palette.len()
    };
    format!("C{}", index % len)
}
