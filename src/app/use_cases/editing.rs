//! Use-Cases für das Bearbeiten von Kontrollpunkten per Zeiger.

use crate::app::{AppState, InteractionState};
use crate::core::PointId;
use glam::{DVec2, Vec2};

/// Startet den Drag eines bestehenden Punkts.
pub fn begin_drag(state: &mut AppState, point_id: PointId, offset: Vec2) {
    if state.curve.point(point_id).is_none() {
        log::warn!("Drag-Start auf unbekanntem Punkt {}", point_id);
        return;
    }
    state.interaction = InteractionState::Dragging { point_id, offset };
}

/// Fügt einen Punkt an der (geklemmten) Kurvenposition ein und zieht ihn sofort.
pub fn add_point_and_drag(state: &mut AppState, curve_pos: DVec2) -> PointId {
    let point_id = state.curve.add_point(curve_pos);
    log::debug!(
        "Punkt {} hinzugefügt bei ({:.3}, {:.3})",
        point_id,
        curve_pos.x,
        curve_pos.y
    );
    state.interaction = InteractionState::Dragging {
        point_id,
        offset: Vec2::ZERO,
    };
    point_id
}

/// Bewegt den gezogenen Punkt auf `screen_pos - offset` (geklemmt).
///
/// Ohne aktiven Drag ein No-op. Existiert der Punkt nicht mehr, endet der Drag.
pub fn drag_point_to(state: &mut AppState, screen_pos: Vec2) {
    let InteractionState::Dragging { point_id, offset } = state.interaction else {
        return;
    };

    let target = state.mapper().to_curve(screen_pos - offset);
    if !state.curve.move_point(point_id, target) {
        log::debug!("Gezogener Punkt {} existiert nicht mehr", point_id);
        state.interaction = InteractionState::Idle;
    }
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.interaction = InteractionState::Idle;
}

/// Entfernt einen Punkt. War er der gezogene Punkt, endet der Drag.
pub fn remove_point(state: &mut AppState, point_id: PointId) {
    if state.curve.remove_point(point_id).is_none() {
        return;
    }
    log::debug!("Punkt {} entfernt", point_id);

    if state.interaction.dragged_point() == Some(point_id) {
        state.interaction = InteractionState::Idle;
    }
}
