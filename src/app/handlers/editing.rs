//! Handler für Punkt-Bearbeitung (Drag, Einfügen, Löschen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;
use glam::{DVec2, Vec2};

/// Startet den Drag eines bestehenden Punkts.
pub fn begin_drag(state: &mut AppState, point_id: PointId, offset: Vec2) {
    use_cases::editing::begin_drag(state, point_id, offset);
}

/// Fügt einen Punkt ein und startet sofort dessen Drag.
pub fn add_point_and_drag(state: &mut AppState, curve_pos: DVec2) {
    use_cases::editing::add_point_and_drag(state, curve_pos);
}

/// Bewegt den gezogenen Punkt zur Zeigerposition.
pub fn drag_point_to(state: &mut AppState, screen_pos: Vec2) {
    use_cases::editing::drag_point_to(state, screen_pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Entfernt einen Punkt.
pub fn remove_point(state: &mut AppState, point_id: PointId) {
    use_cases::editing::remove_point(state, point_id);
}
