use crate::app::{AppCommand, AppIntent, AppState, InteractionState, PointerButton};
use crate::core::PointId;
use glam::{DVec2, Vec2};

use super::map_intent_to_commands;

fn press(button: PointerButton, x: f32, y: f32) -> AppIntent {
    AppIntent::PointerPressed {
        button,
        screen_pos: Vec2::new(x, y),
    }
}

#[test]
fn save_requested_maps_to_save_curve() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands, vec![AppCommand::SaveCurve]);
}

#[test]
fn viewport_resized_maps_to_set_viewport_size() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [1024.0, 768.0],
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetViewportSize {
            size: [1024.0, 768.0]
        }]
    );
}

#[test]
fn primary_press_on_point_begins_drag_with_offset() {
    let state = AppState::new();
    // (1,1) liegt bei (800, 0) im Standard-Viewport 800×600
    let commands = map_intent_to_commands(&state, press(PointerButton::Primary, 797.0, 4.0));

    assert_eq!(
        commands,
        vec![AppCommand::BeginDrag {
            point_id: PointId(2),
            offset: Vec2::new(-3.0, 4.0),
        }]
    );
}

#[test]
fn primary_press_on_empty_space_adds_clamped_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, press(PointerButton::Primary, 400.0, 150.0));

    assert_eq!(
        commands,
        vec![AppCommand::AddPointAndDrag {
            curve_pos: DVec2::new(0.5, 0.75),
        }]
    );
}

#[test]
fn primary_press_while_dragging_is_ignored() {
    let mut state = AppState::new();
    state.interaction = InteractionState::Dragging {
        point_id: PointId(1),
        offset: Vec2::ZERO,
    };

    let commands = map_intent_to_commands(&state, press(PointerButton::Primary, 400.0, 300.0));

    assert!(commands.is_empty());
}

#[test]
fn secondary_press_on_empty_space_is_noop() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, press(PointerButton::Secondary, 400.0, 300.0));

    assert!(commands.is_empty());
}

#[test]
fn secondary_press_on_point_removes_it() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, press(PointerButton::Secondary, 2.0, 598.0));

    assert_eq!(
        commands,
        vec![AppCommand::RemovePoint {
            point_id: PointId(1)
        }]
    );
}

#[test]
fn pointer_move_only_drags_while_dragging() {
    let mut state = AppState::new();
    let moved = AppIntent::PointerMoved {
        screen_pos: Vec2::new(10.0, 10.0),
    };

    assert!(map_intent_to_commands(&state, moved.clone()).is_empty());

    state.interaction = InteractionState::Dragging {
        point_id: PointId(1),
        offset: Vec2::ZERO,
    };
    assert_eq!(
        map_intent_to_commands(&state, moved),
        vec![AppCommand::DragPointTo {
            screen_pos: Vec2::new(10.0, 10.0)
        }]
    );
}

#[test]
fn primary_release_ends_drag_only_when_dragging() {
    let mut state = AppState::new();
    let release = AppIntent::PointerReleased {
        button: PointerButton::Primary,
    };

    assert!(map_intent_to_commands(&state, release.clone()).is_empty());

    state.interaction = InteractionState::Dragging {
        point_id: PointId(2),
        offset: Vec2::ZERO,
    };
    assert_eq!(
        map_intent_to_commands(&state, release),
        vec![AppCommand::EndDrag]
    );
}
