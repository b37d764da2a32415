use crate::core::PointId;
use glam::{DVec2, Vec2};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Canvas-Größe für den Koordinaten-Mapper setzen
    SetViewportSize { size: [f32; 2] },
    /// Drag eines bestehenden Punkts beginnen
    BeginDrag { point_id: PointId, offset: Vec2 },
    /// Neuen Punkt einfügen und sofort ziehen
    AddPointAndDrag { curve_pos: DVec2 },
    /// Gezogenen Punkt zur Zeigerposition bewegen
    DragPointTo { screen_pos: Vec2 },
    /// Drag beenden
    EndDrag,
    /// Punkt entfernen
    RemovePoint { point_id: PointId },
    /// Aktuelle Kurve mit Zeitstempel-Dateinamen speichern
    SaveCurve,
    /// Kurve aus Datei laden (ersetzt bei Erfolg alle Punkte)
    LoadCurve { path: PathBuf },
    /// Anwendung beenden
    RequestExit,
}
