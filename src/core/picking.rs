//! Hit-Test von Kontrollpunkten in Pixel-Koordinaten.
//!
//! Hover-Hervorhebung und Klick-Treffer nutzen dieselbe Funktion,
//! damit visuelles Feedback und Interaktion exakt übereinstimmen.

use super::{ControlPoint, CoordinateMapper, CurveModel, PointId};
use glam::Vec2;

/// Ergebnis eines erfolgreichen Hit-Tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Identität des getroffenen Punkts
    pub id: PointId,
    /// Gerenderte Pixel-Position des Punkts
    pub screen_pos: Vec2,
}

/// Prüft, ob `pointer` im Pick-Radius um den gerenderten Punkt liegt (Grenze inklusive).
pub fn is_within_pick_radius(
    mapper: &CoordinateMapper,
    point: &ControlPoint,
    pointer: Vec2,
    pick_radius_px: f32,
) -> bool {
    mapper.to_screen(point.position).distance(pointer) <= pick_radius_px
}

/// Erster Punkt in Sequenz-Reihenfolge innerhalb des Pick-Radius.
///
/// Bei exakt übereinanderliegenden Punkten gewinnt damit die niedrigste ID,
/// da das Modell gleiche x-Werte nach ID ordnet.
pub fn pick_point(
    model: &CurveModel,
    mapper: &CoordinateMapper,
    pointer: Vec2,
    pick_radius_px: f32,
) -> Option<PickHit> {
    model
        .points()
        .iter()
        .find(|point| is_within_pick_radius(mapper, point, pointer, pick_radius_px))
        .map(|point| PickHit {
            id: point.id,
            screen_pos: mapper.to_screen(point.position),
        })
}
