//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::is_within_pick_radius;
use crate::shared::{RenderScene, SceneStyle, ScenePoint};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// `hover_pos` ist die Zeigerposition in Canvas-Pixeln (None, wenn der
/// Zeiger außerhalb des Fensters ist). Mutiert keinen Zustand.
pub fn build(state: &AppState, hover_pos: Option<Vec2>) -> RenderScene {
    let mapper = state.mapper();
    let options = &state.options;
    let [width, height] = state.view.viewport_size;

    let curve = state
        .curve
        .interpolate(options.display_samples)
        .points
        .into_iter()
        .map(|p| mapper.to_screen(p))
        .collect();

    let points = state
        .curve
        .points()
        .iter()
        .map(|point| ScenePoint {
            center: mapper.to_screen(point.position),
            hovered: hover_pos.is_some_and(|pointer| {
                is_within_pick_radius(&mapper, point, pointer, options.pick_radius_px)
            }),
        })
        .collect();

    RenderScene {
        viewport_size: state.view.viewport_size,
        grid_lines: grid_lines(width, height, options.grid_divisions),
        curve,
        points,
        point_radius: options.pick_radius_px,
        style: SceneStyle {
            background: options.background_color,
            grid: options.grid_color,
            curve: options.curve_color,
            curve_width: options.curve_width,
            point: options.point_color,
            point_hover: options.point_hover_color,
            point_outline: options.point_outline_color,
            point_outline_width: options.point_outline_width,
        },
    }
}

/// Innere Rasterlinien (ohne Rand) für `divisions` Unterteilungen je Achse.
fn grid_lines(width: f32, height: f32, divisions: u32) -> Vec<[Vec2; 2]> {
    let mut lines = Vec::with_capacity(2 * divisions.saturating_sub(1) as usize);
    for i in 1..divisions {
        let x = (width * i as f32 / divisions as f32).floor();
        lines.push([Vec2::new(x, 0.0), Vec2::new(x, height)]);
    }
    for i in 1..divisions {
        let y = (height * i as f32 / divisions as f32).floor();
        lines.push([Vec2::new(0.0, y), Vec2::new(width, y)]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_samples_display_curve_in_screen_space() {
        let state = AppState::new();
        let scene = build(&state, None);

        assert_eq!(scene.curve.len(), 200);
        assert_eq!(scene.curve.first(), Some(&Vec2::new(0.0, 600.0)));
        assert_eq!(scene.curve.last(), Some(&Vec2::new(800.0, 0.0)));
        assert_eq!(scene.points.len(), 2);
        assert!(scene.points.iter().all(|p| !p.hovered));
    }

    #[test]
    fn build_draws_ten_by_ten_grid() {
        let state = AppState::new();
        let scene = build(&state, None);

        // 9 vertikale + 9 horizontale Innenlinien
        assert_eq!(scene.grid_lines.len(), 18);
        assert_eq!(scene.grid_lines[0][0], Vec2::new(80.0, 0.0));
        assert_eq!(scene.grid_lines[9][0], Vec2::new(0.0, 60.0));
    }

    #[test]
    fn build_highlights_point_under_pointer() {
        let state = AppState::new();
        let scene = build(&state, Some(Vec2::new(794.0, 5.0)));

        assert!(!scene.points[0].hovered);
        assert!(scene.points[1].hovered);
    }

    #[test]
    fn build_follows_viewport_size() {
        let mut state = AppState::new();
        state.view.viewport_size = [400.0, 400.0];
        let scene = build(&state, None);

        assert_eq!(scene.points[1].center, Vec2::new(400.0, 0.0));
        assert_eq!(scene.grid_lines[0][0], Vec2::new(40.0, 0.0));
    }

    #[test]
    fn build_without_curve_keeps_points() {
        let mut state = AppState::new();
        state.curve.remove_point_at(1);
        let scene = build(&state, None);

        assert!(!scene.has_curve());
        assert_eq!(scene.points.len(), 1);
    }
}
