use glam::Vec2;
use std::path::PathBuf;

/// Zeigertaste, die für die Kurven-Interaktion relevant ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste: Greifen/Erzeugen und Ziehen
    Primary,
    /// Rechte Maustaste: Punkt löschen
    Secondary,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Zeiger-Positionen liegen in Canvas-Pixeln (Ursprung oben links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Canvas-Größe dieses Frames (wird jeden Frame zuerst gesendet)
    ViewportResized { size: [f32; 2] },
    /// Zeigertaste im Canvas gedrückt
    PointerPressed {
        button: PointerButton,
        screen_pos: Vec2,
    },
    /// Zeiger bewegt (auch außerhalb des Canvas)
    PointerMoved { screen_pos: Vec2 },
    /// Zeigertaste losgelassen (überall)
    PointerReleased { button: PointerButton },
    /// Aktuelle Kurve speichern
    SaveRequested,
    /// Kurve aus Datei laden
    LoadRequested { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,
}
