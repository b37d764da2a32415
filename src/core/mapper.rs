//! Abbildung zwischen Kurvenraum [0,1]² und Pixelraum des Canvas.

use glam::{DVec2, Vec2};

/// Bidirektionale Transformation Kurvenraum ↔ Pixel.
///
/// Wird pro Frame aus der aktuellen Canvas-Größe erzeugt und nicht über
/// eine Größenänderung hinweg gehalten. Pixel-y wächst nach unten, Kurven-y nach oben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    /// Canvas-Breite in Pixeln
    pub width: f32,
    /// Canvas-Höhe in Pixeln
    pub height: f32,
}

impl CoordinateMapper {
    /// Erstellt einen Mapper für die gegebene Canvas-Größe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Erstellt einen Mapper aus `[breite, höhe]`.
    pub fn from_size(size: [f32; 2]) -> Self {
        Self::new(size[0], size[1])
    }

    /// Pixel → Kurvenraum: `x = px/w`, `y = 1 - py/h`. Kein Klemmen.
    pub fn to_curve(&self, screen_pos: Vec2) -> DVec2 {
        let width = f64::from(self.width.max(1.0));
        let height = f64::from(self.height.max(1.0));
        DVec2::new(
            f64::from(screen_pos.x) / width,
            1.0 - f64::from(screen_pos.y) / height,
        )
    }

    /// Kurvenraum → Pixel: `px = round(x·w)`, `py = round((1-y)·h)`. Kein Klemmen.
    pub fn to_screen(&self, curve_pos: DVec2) -> Vec2 {
        Vec2::new(
            (curve_pos.x * f64::from(self.width)).round() as f32,
            ((1.0 - curve_pos.y) * f64::from(self.height)).round() as f32,
        )
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_curve_inverts_y() {
        let mapper = CoordinateMapper::new(800.0, 600.0);
        let top_left = mapper.to_curve(Vec2::new(0.0, 0.0));
        assert_relative_eq!(top_left.x, 0.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = mapper.to_curve(Vec2::new(800.0, 600.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, 0.0);
    }

    #[test]
    fn test_to_screen_rounds() {
        let mapper = CoordinateMapper::new(800.0, 600.0);
        let px = mapper.to_screen(DVec2::new(0.5004, 0.25));
        assert_eq!(px, Vec2::new(400.0, 450.0));
    }

    #[test]
    fn test_no_clamping() {
        let mapper = CoordinateMapper::new(100.0, 100.0);
        let outside = mapper.to_curve(Vec2::new(-50.0, 250.0));
        assert_relative_eq!(outside.x, -0.5);
        assert_relative_eq!(outside.y, -1.5);
    }

    #[test]
    fn test_round_trip_within_one_pixel() {
        for &(w, h) in &[(800.0, 600.0), (333.0, 917.0), (1.0, 1.0), (1920.0, 1080.0)] {
            let mapper = CoordinateMapper::new(w, h);
            for i in 0..=20 {
                for j in 0..=20 {
                    let curve = DVec2::new(f64::from(i) / 20.0, f64::from(j) / 20.0);
                    let screen = mapper.to_screen(curve);
                    let again = mapper.to_screen(mapper.to_curve(screen));
                    assert!((screen - again).abs().max_element() <= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_resize_changes_mapping() {
        let small = CoordinateMapper::from_size([100.0, 100.0]);
        let large = CoordinateMapper::from_size([200.0, 400.0]);
        let p = DVec2::new(0.5, 0.5);
        assert_eq!(small.to_screen(p), Vec2::new(50.0, 50.0));
        assert_eq!(large.to_screen(p), Vec2::new(100.0, 200.0));
    }
}
