use crate::shared::Rgba;

/// Zeichenfläche: Ursprung oben links, y nach unten, Einheit Pixel.
pub trait DrawSurface {
    /// Leert die gesamte Fläche.
    fn clear(&mut self);
    /// Gefülltes Rechteck mit linker oberer Ecke `(x, y)`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    /// Text mit Grundlinie bei `y`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Rgba);
    /// Gerades Liniensegment.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba);
}

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgba,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size: f32,
        color: Rgba,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
    },
}

/// Zeichenfläche, die alle Befehle nur aufzeichnet.
///
/// `clear` verwirft bereits aufgezeichnete Befehle nicht, sondern wird selbst
/// als Befehl aufgezeichnet.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf alle Befehle.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Entnimmt alle Befehle und leert die Aufzeichnung.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Anzahl der aufgezeichneten Liniensegmente.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Alle aufgezeichneten Texte in Reihenfolge.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Anzahl der gefüllten Rechtecke in der angegebenen Farbe.
    pub fn rect_count_with_color(&self, wanted: Rgba) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == wanted))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}
