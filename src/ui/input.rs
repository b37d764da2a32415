//! Canvas-Input-Handling: Maus-Events und Tastatur → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Canvas (Hover-Position).
#[derive(Default)]
pub struct InputState {
    hover_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { hover_pos: None }
    }

    /// Letzte bekannte Zeigerposition in Canvas-Pixeln.
    pub fn hover_pos(&self) -> Option<Vec2> {
        self.hover_pos
    }

    /// Sammelt alle Events dieses Frames in Eingangsreihenfolge.
    ///
    /// Das erste Intent ist immer `ViewportResized`, damit alle folgenden
    /// Zeiger-Intents mit der aktuellen Canvas-Größe abgebildet werden.
    /// Tasten- und Zeiger-Events bleiben untereinander in ihrer Reihenfolge.
    pub fn collect_canvas_events(&mut self, ui: &egui::Ui, canvas: egui::Rect) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: [canvas.width(), canvas.height()],
        }];

        let raw_events = ui.input(|i| i.events.clone());
        for event in &raw_events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    self.hover_pos = Some(to_canvas(*pos, canvas));
                }
                egui::Event::PointerGone => {
                    self.hover_pos = None;
                }
                _ => {}
            }
            events.extend(
                keyboard::translate_key_event(event)
                    .or_else(|| translate_pointer_event(event, canvas)),
            );
        }

        events
    }
}

/// Übersetzt ein einzelnes egui-Zeiger-Event in ein AppIntent.
///
/// Drücken zählt nur innerhalb des Canvas; Bewegen und Loslassen überall,
/// damit Drags außerhalb des Fensters weiterlaufen und sauber enden.
pub(crate) fn translate_pointer_event(event: &egui::Event, canvas: egui::Rect) -> Option<AppIntent> {
    match event {
        egui::Event::PointerMoved(pos) => Some(AppIntent::PointerMoved {
            screen_pos: to_canvas(*pos, canvas),
        }),
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = map_button(*button)?;
            if !*pressed {
                Some(AppIntent::PointerReleased { button })
            } else if canvas.contains(*pos) {
                Some(AppIntent::PointerPressed {
                    button,
                    screen_pos: to_canvas(*pos, canvas),
                })
            } else {
                None
            }
        }
        _ => None,
    }
}

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Fensterposition → Canvas-Pixel (Ursprung oben links im Canvas).
fn to_canvas(pos: egui::Pos2, canvas: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - canvas.min.x, pos.y - canvas.min.y)
}
