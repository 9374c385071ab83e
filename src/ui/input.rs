//! Zeichenflächen-Input: Zeiger-/Touch-Events → klassifizierte Klicks → AppIntent.

use crate::app::AppIntent;
use crate::core::{ClickKind, Point2D};

/// Herkunft eines rohen Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Maustaste gedrückt
    Mouse(egui::PointerButton),
    /// Touch-Beginn
    Touch,
}

/// Rohes Zeiger-Ereignis in Client-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointerEvent {
    pub client_pos: egui::Pos2,
    pub source: PointerSource,
}

/// Klassifiziertes Ereignis in flächenlokalen Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedClick {
    pub position: Point2D,
    pub kind: ClickKind,
}

/// Übersetzt ein rohes Ereignis in Position relativ zu `surface_origin` plus Klick-Art.
///
/// Touch ist immer primär; unbekannte Tasten gelten als primär.
pub fn classify(event: &RawPointerEvent, surface_origin: egui::Pos2) -> ClassifiedClick {
    let local = event.client_pos - surface_origin;
    let kind = match event.source {
        PointerSource::Mouse(egui::PointerButton::Secondary) => ClickKind::Secondary,
        PointerSource::Mouse(egui::PointerButton::Middle) => ClickKind::Auxiliary,
        PointerSource::Mouse(_) | PointerSource::Touch => ClickKind::Primary,
    };
    ClassifiedClick {
        position: Point2D::new(local.x as f64, local.y as f64),
        kind,
    }
}

/// Sammelt die rohen Ereignisse eines Frames innerhalb von `rect`.
///
/// Backends melden Touch zusätzlich als emulierte Maustaste; enthält der Frame
/// einen Touch-Beginn, werden die Maustasten-Ereignisse desselben Frames verworfen.
pub fn raw_events_in_rect(events: &[egui::Event], rect: egui::Rect) -> Vec<RawPointerEvent> {
    let touches: Vec<RawPointerEvent> = events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Touch {
                phase: egui::TouchPhase::Start,
                pos,
                ..
            } if rect.contains(*pos) => Some(RawPointerEvent {
                client_pos: *pos,
                source: PointerSource::Touch,
            }),
            _ => None,
        })
        .collect();
    if !touches.is_empty() {
        return touches;
    }

    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if rect.contains(*pos) => Some(RawPointerEvent {
                client_pos: *pos,
                source: PointerSource::Mouse(*button),
            }),
            _ => None,
        })
        .collect()
}

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Rechteck der Zeichenfläche im letzten Frame
    last_rect: Option<egui::Rect>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `response` muss mit `Sense::click()` alloziert sein, damit Sekundärklicks
    /// bei der Fläche landen und kein Kontextmenü öffnen.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        if self.last_rect != Some(rect) {
            log::debug!("Zeichenfläche: {:?}", rect);
            self.last_rect = Some(rect);
        }

        if !response.hovered() && !response.contains_pointer() {
            return Vec::new();
        }

        let events = ui.input(|i| i.events.clone());
        raw_events_in_rect(&events, rect)
            .iter()
            .map(|raw| {
                let click = classify(raw, rect.min);
                AppIntent::CanvasClicked {
                    position: click.position,
                    kind: click.kind,
                }
            })
            .collect()
    }
}
