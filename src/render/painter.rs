//! egui-Backend für den Draw-Command-Sink.

use super::DrawSurface;
use crate::shared::Rgba;

/// Linienstärke der Kanten in Pixeln.
const LINE_WIDTH: f32 = 1.0;

/// Zeichnet über einen `egui::Painter` in ein Rechteck des Viewports.
///
/// Koordinaten sind relativ zur linken oberen Ecke von `rect`.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    background: Rgba,
}

impl<'a> PainterSurface<'a> {
    /// Erstellt eine Fläche über `rect` mit Hintergrundfarbe für `clear`.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, background: Rgba) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.rect.min + egui::vec2(x as f32, y as f32)
    }
}

/// Wandelt eine RGBA-Farbe in [0, 1] in eine egui-Farbe.
pub(crate) fn to_color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color;
    egui::Color32::from(egui::Rgba::from_rgba_unmultiplied(r, g, b, a))
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(self.background));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        let rect = egui::Rect::from_min_size(self.to_screen(x, y), egui::vec2(w as f32, h as f32));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Rgba) {
        self.painter.text(
            self.to_screen(x, y),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(font_size),
            to_color32(color),
        );
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(x1, y1), self.to_screen(x2, y2)],
            egui::Stroke::new(LINE_WIDTH, to_color32(color)),
        );
    }
}
