//! Keyboard-Shortcuts für den Kurven-Editor.
//!
//! Übersetzt einzelne Tasten-Events in `AppIntent`s. Der Aufrufer reicht die
//! Events in Eingangsreihenfolge durch, gemischt mit den Zeiger-Events.

use crate::app::AppIntent;

/// Übersetzt ein egui-Tasten-Event in ein AppIntent.
///
/// - `S` (mit oder ohne Ctrl/Cmd): Kurve speichern
/// - `Ctrl/Cmd + Q`: Beenden
///
/// Nur das erste Drücken zählt; Auto-Repeat und Loslassen werden ignoriert.
pub(super) fn translate_key_event(event: &egui::Event) -> Option<AppIntent> {
    let egui::Event::Key {
        key,
        pressed: true,
        repeat: false,
        modifiers,
        ..
    } = event
    else {
        return None;
    };

    match key {
        egui::Key::S if !modifiers.shift && !modifiers.alt => Some(AppIntent::SaveRequested),
        egui::Key::Q if modifiers.command => Some(AppIntent::ExitRequested),
        _ => None,
    }
}
