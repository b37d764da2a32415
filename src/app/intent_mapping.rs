//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fallen die Übergänge der Zeiger-Interaktion: Hit-Test beim Drücken,
//! Drag-Updates nur im Dragging-Zustand, Loslassen beendet den Drag.

use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::core::{clamp_to_unit, pick_point};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos,
        } => map_primary_press(state, screen_pos),
        AppIntent::PointerPressed {
            button: PointerButton::Secondary,
            screen_pos,
        } => pick_point(
            &state.curve,
            &state.mapper(),
            screen_pos,
            state.options.pick_radius_px,
        )
        .map(|hit| vec![AppCommand::RemovePoint { point_id: hit.id }])
        .unwrap_or_default(),
        AppIntent::PointerMoved { screen_pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::DragPointTo { screen_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased {
            button: PointerButton::Primary,
        } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased {
            button: PointerButton::Secondary,
        } => vec![],
        AppIntent::SaveRequested => vec![AppCommand::SaveCurve],
        AppIntent::LoadRequested { path } => vec![AppCommand::LoadCurve { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Primärklick im Idle-Zustand: bestehenden Punkt greifen oder neuen erzeugen.
/// Während eines Drags wird ein weiterer Primärklick ignoriert.
fn map_primary_press(state: &AppState, screen_pos: Vec2) -> Vec<AppCommand> {
    if state.interaction.is_dragging() {
        return vec![];
    }

    let mapper = state.mapper();
    match pick_point(
        &state.curve,
        &mapper,
        screen_pos,
        state.options.pick_radius_px,
    ) {
        Some(hit) => vec![AppCommand::BeginDrag {
            point_id: hit.id,
            offset: screen_pos - hit.screen_pos,
        }],
        None => vec![AppCommand::AddPointAndDrag {
            curve_pos: clamp_to_unit(mapper.to_curve(screen_pos)),
        }],
    }
}

#[cfg(test)]
mod tests;
