//! Übersetzung der Szene in egui-Shapes.

use crate::shared::{RenderScene, ScenePoint, SceneStyle};
use glam::Vec2;

/// Baut alle Shapes eines Frames in Zeichenreihenfolge.
pub fn scene_shapes(scene: &RenderScene, origin: egui::Pos2) -> Vec<egui::Shape> {
    let style = &scene.style;
    let mut shapes = Vec::with_capacity(2 + scene.grid_lines.len() + 2 * scene.points.len());

    let [width, height] = scene.viewport_size;
    shapes.push(egui::Shape::rect_filled(
        egui::Rect::from_min_size(origin, egui::vec2(width, height)),
        0.0,
        color(style.background),
    ));

    let grid_stroke = egui::Stroke::new(1.0, color(style.grid));
    shapes.extend(
        scene
            .grid_lines
            .iter()
            .map(|[a, b]| egui::Shape::line_segment([at(origin, *a), at(origin, *b)], grid_stroke)),
    );

    if scene.has_curve() {
        let polyline = scene.curve.iter().map(|p| at(origin, *p)).collect();
        shapes.push(egui::Shape::line(
            polyline,
            egui::Stroke::new(style.curve_width, color(style.curve)),
        ));
    }

    for point in &scene.points {
        push_point(&mut shapes, origin, point, scene.point_radius, style);
    }

    shapes
}

fn push_point(
    shapes: &mut Vec<egui::Shape>,
    origin: egui::Pos2,
    point: &ScenePoint,
    radius: f32,
    style: &SceneStyle,
) {
    let center = at(origin, point.center);
    let fill = if point.hovered {
        style.point_hover
    } else {
        style.point
    };
    shapes.push(egui::Shape::circle_filled(center, radius, color(fill)));
    shapes.push(egui::Shape::circle_stroke(
        center,
        radius,
        egui::Stroke::new(style.point_outline_width, color(style.point_outline)),
    ));
}

fn at(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

fn color([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SceneStyle;

    fn scene() -> RenderScene {
        RenderScene {
            viewport_size: [100.0, 50.0],
            grid_lines: vec![[Vec2::new(10.0, 0.0), Vec2::new(10.0, 50.0)]],
            curve: vec![Vec2::new(0.0, 50.0), Vec2::new(100.0, 0.0)],
            points: vec![
                ScenePoint {
                    center: Vec2::new(0.0, 50.0),
                    hovered: false,
                },
                ScenePoint {
                    center: Vec2::new(100.0, 0.0),
                    hovered: true,
                },
            ],
            point_radius: 8.0,
            style: SceneStyle {
                background: [1, 2, 3],
                point: [10, 10, 10],
                point_hover: [20, 20, 20],
                ..SceneStyle::default()
            },
        }
    }

    #[test]
    fn test_shapes_follow_draw_order() {
        let shapes = scene_shapes(&scene(), egui::Pos2::ZERO);

        // Hintergrund + 1 Rasterlinie + Kurve + 2 × (Füllung + Umrandung)
        assert_eq!(shapes.len(), 1 + 1 + 1 + 4);
        assert!(matches!(shapes[0], egui::Shape::Rect(_)));
        assert!(matches!(shapes[1], egui::Shape::LineSegment { .. }));
        assert!(matches!(shapes[2], egui::Shape::Path(_)));
        assert!(matches!(shapes[3], egui::Shape::Circle(_)));
    }

    #[test]
    fn test_hovered_point_uses_hover_color() {
        let shapes = scene_shapes(&scene(), egui::Pos2::ZERO);

        let fills: Vec<egui::Color32> = shapes
            .iter()
            .filter_map(|s| match s {
                egui::Shape::Circle(c) if c.fill != egui::Color32::TRANSPARENT => Some(c.fill),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                egui::Color32::from_rgb(10, 10, 10),
                egui::Color32::from_rgb(20, 20, 20)
            ]
        );
    }

    #[test]
    fn test_origin_offsets_all_positions() {
        let shapes = scene_shapes(&scene(), egui::pos2(5.0, 20.0));

        match &shapes[3] {
            egui::Shape::Circle(c) => assert_eq!(c.center, egui::pos2(5.0, 70.0)),
            other => panic!("Kreis erwartet, gefunden: {other:?}"),
        }
    }

    #[test]
    fn test_single_sample_curve_is_skipped() {
        let mut scene = scene();
        scene.curve.truncate(1);
        scene.points.clear();
        let shapes = scene_shapes(&scene, egui::Pos2::ZERO);

        assert_eq!(shapes.len(), 2);
    }
}
