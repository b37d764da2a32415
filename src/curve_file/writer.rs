//! Writer für Kurvendateien.

use crate::core::SampledCurve;
use glam::DVec2;
use std::fmt::Write as _;

/// Serialisiert Kontrollpunkte plus y-Werte der abgetasteten Kurve.
///
/// Alle Zahlen mit 6 Nachkommastellen.
pub fn write_curve_file(points: &[DVec2], curve: &SampledCurve) -> String {
    let mut output = String::with_capacity(16 * (points.len() + curve.len() + 1));

    // write! auf String ist infallibel
    let _ = writeln!(output, "{} {}", points.len(), curve.len());
    for point in points {
        let _ = writeln!(output, "{:.6} {:.6}", point.x, point.y);
    }
    for y in curve.y_values() {
        let _ = writeln!(output, "{:.6}", y);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveModel;

    #[test]
    fn test_write_layout() {
        let model = CurveModel::new();
        let curve = model.interpolate(3);
        let written = write_curve_file(&model.positions(), &curve);
        assert_eq!(
            written,
            "2 3\n0.000000 0.000000\n1.000000 1.000000\n0.000000\n0.500000\n1.000000\n"
        );
    }

    #[test]
    fn test_write_rounds_to_six_decimals() {
        let curve = SampledCurve::default();
        let written = write_curve_file(&[DVec2::new(1.0 / 3.0, 0.1234567)], &curve);
        assert_eq!(written, "1 0\n0.333333 0.123457\n");
    }
}
