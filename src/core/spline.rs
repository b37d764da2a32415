//! Interpolations-Mathematik: natürlicher kubischer Spline und lineare Interpolation.
//!
//! Alle Funktionen sind rein und arbeiten auf nach x sortierten Stützstellen.
//! Die Auswahl des Fallbacks bei degenerierter Eingabe trifft der Aufrufer
//! (`CurveModel::interpolate`), nicht dieses Modul.

use glam::DVec2;
use thiserror::Error;

/// Minimale Intervallbreite, unterhalb derer zwei Stützstellen als identisch gelten.
const KNOT_EPSILON: f64 = 1e-12;

/// Fehler beim Fitten eines natürlichen kubischen Splines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Weniger als drei Stützstellen
    #[error("natural cubic spline needs at least 3 knots, got {0}")]
    TooFewPoints(usize),
    /// Zwei aufeinanderfolgende Stützstellen haben (nahezu) denselben x-Wert
    #[error("duplicate knot x-values at index {index}")]
    DuplicateKnots { index: usize },
    /// Tridiagonales Gleichungssystem ist singulär
    #[error("singular tridiagonal system in spline fit")]
    Singular,
}

/// Stückweise kubisches Polynom `a + b·dx + c·dx² + d·dx³` je Intervall.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    knots_x: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fittet einen natürlichen Spline (zweite Ableitung an beiden Enden = 0).
    ///
    /// Erwartet nach x sortierte Punkte mit streng steigenden x-Werten.
    pub fn fit(points: &[DVec2]) -> Result<Self, SplineError> {
        let n = points.len();
        if n < 3 {
            return Err(SplineError::TooFewPoints(n));
        }

        let x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();

        let mut h = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let width = x[i + 1] - x[i];
            if width.abs() <= KNOT_EPSILON {
                return Err(SplineError::DuplicateKnots { index: i + 1 });
            }
            h.push(width);
        }

        // lower[i] * c[i-1] + diag[i] * c[i] + upper[i] * c[i+1] = rhs[i]
        let mut diag = vec![0.0; n];
        let mut upper = vec![0.0; n - 1];
        let mut lower = vec![0.0; n - 1];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            lower[i - 1] = h[i - 1];
            diag[i] = 2.0 * (h[i - 1] + h[i]);
            upper[i] = h[i];
            rhs[i] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        // Natürliche Randbedingung: c[0] = c[n-1] = 0
        diag[0] = 1.0;
        diag[n - 1] = 1.0;

        let c = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

        let mut b = Vec::with_capacity(n - 1);
        let mut d = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            b.push((y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0);
            d.push((c[i + 1] - c[i]) / (3.0 * h[i]));
        }

        Ok(Self {
            knots_x: x,
            a: y,
            b,
            c,
            d,
        })
    }

    /// Wertet den Spline an `x` aus. Außerhalb der Stützstellen wird das
    /// Randpolynom fortgesetzt.
    pub fn evaluate(&self, x: f64) -> f64 {
        let i = segment_index(&self.knots_x, x);
        let dx = x - self.knots_x[i];
        self.a[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i]))
    }

    /// Wertet den Spline auf einem gleichmäßigen Raster über `[x₀, xₙ₋₁]` aus.
    pub fn sample(&self, samples: usize) -> Vec<DVec2> {
        let first = self.knots_x[0];
        let last = self.knots_x[self.knots_x.len() - 1];
        linspace(first, last, samples)
            .map(|x| DVec2::new(x, self.evaluate(x)))
            .collect()
    }
}

/// Löst ein tridiagonales System mit dem Thomas-Algorithmus.
fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, SplineError> {
    let n = diag.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if diag[0].abs() < KNOT_EPSILON {
        return Err(SplineError::Singular);
    }
    c_prime[0] = upper[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - lower[i - 1] * c_prime[i - 1];
        if denom.abs() < KNOT_EPSILON || !denom.is_finite() {
            return Err(SplineError::Singular);
        }
        if i < n - 1 {
            c_prime[i] = upper[i] / denom;
        }
        d_prime[i] = (rhs[i] - lower[i - 1] * d_prime[i - 1]) / denom;
    }

    let mut solution = vec![0.0; n];
    solution[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        solution[i] = d_prime[i] - c_prime[i] * solution[i + 1];
    }

    if solution.iter().any(|v| !v.is_finite()) {
        return Err(SplineError::Singular);
    }
    Ok(solution)
}

/// Index des Intervalls `[x_i, x_{i+1}]`, das `x` enthält (geklemmt auf gültige Intervalle).
fn segment_index(knots_x: &[f64], x: f64) -> usize {
    let last_segment = knots_x.len().saturating_sub(2);
    // partition_point: erster Index mit knots_x[i] > x
    knots_x
        .partition_point(|&k| k <= x)
        .saturating_sub(1)
        .min(last_segment)
}

/// `count` gleichmäßig verteilte Werte von `start` bis `end` (beide inklusive).
///
/// Der letzte Wert ist exakt `end`, damit das Raster monoton bleibt.
pub fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Gerade zwischen zwei Punkten, `samples` Schritte in x und y.
pub fn sample_line(start: DVec2, end: DVec2, samples: usize) -> Vec<DVec2> {
    linspace(start.x, end.x, samples)
        .zip(linspace(start.y, end.y, samples))
        .map(|(x, y)| DVec2::new(x, y))
        .collect()
}

/// Stückweise lineare Interpolation über ein gleichmäßiges x-Raster.
///
/// Verträgt doppelte x-Werte. Liegen alle Punkte auf demselben x,
/// läuft das Ergebnis linear vom ersten zum letzten y-Wert.
pub fn sample_piecewise_linear(points: &[DVec2], samples: usize) -> Vec<DVec2> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if points.len() == 1 {
        return vec![first; samples];
    }
    if (last.x - first.x).abs() <= KNOT_EPSILON {
        return sample_line(first, last, samples);
    }

    linspace(first.x, last.x, samples)
        .map(|x| DVec2::new(x, linear_at(points, x)))
        .collect()
}

/// Lineare Interpolation an `x`; bei doppelten x-Werten gewinnt das letzte
/// Intervall mit positiver Breite, das `x` enthält.
fn linear_at(points: &[DVec2], x: f64) -> f64 {
    let mut value = points[0].y;
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        if x < p0.x {
            break;
        }
        let width = p1.x - p0.x;
        if width <= KNOT_EPSILON {
            value = p1.y;
            continue;
        }
        let t = ((x - p0.x) / width).clamp(0.0, 1.0);
        value = p0.y + (p1.y - p0.y) * t;
        if x <= p1.x {
            break;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn points(raw: &[(f64, f64)]) -> Vec<DVec2> {
        raw.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
    }

    #[test]
    fn test_linspace_endpoints_and_count() {
        let values: Vec<f64> = linspace(0.25, 0.75, 5).collect();
        assert_eq!(values.len(), 5);
        assert_relative_eq!(values[0], 0.25);
        assert_relative_eq!(values[2], 0.5);
        assert_eq!(values[4], 0.75);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
        let single: Vec<f64> = linspace(0.3, 1.0, 1).collect();
        assert_eq!(single, vec![0.3]);
    }

    #[test]
    fn test_spline_passes_through_knots() {
        let knots = points(&[(0.0, 0.0), (0.3, 0.8), (0.6, 0.2), (1.0, 1.0)]);
        let spline = NaturalCubicSpline::fit(&knots).expect("Fit sollte gelingen");
        for knot in &knots {
            assert_abs_diff_eq!(spline.evaluate(knot.x), knot.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spline_natural_boundary() {
        let knots = points(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let spline = NaturalCubicSpline::fit(&knots).expect("Fit sollte gelingen");
        // c = zweite Ableitung / 2 an den Randknoten
        assert_abs_diff_eq!(spline.c[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.c[2], 0.0, epsilon = 1e-12);
        // Symmetrische Eingabe → Maximum in der Mitte
        assert_abs_diff_eq!(spline.evaluate(0.5), 1.0, epsilon = 1e-12);
        assert!(spline.evaluate(0.25) > 0.5);
    }

    #[test]
    fn test_spline_reproduces_straight_line() {
        let knots = points(&[(0.0, 0.0), (0.2, 0.2), (0.7, 0.7), (1.0, 1.0)]);
        let spline = NaturalCubicSpline::fit(&knots).expect("Fit sollte gelingen");
        for sample in spline.sample(11) {
            assert_abs_diff_eq!(sample.y, sample.x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spline_is_c2_continuous_at_inner_knot() {
        let knots = points(&[(0.0, 0.1), (0.4, 0.9), (1.0, 0.3)]);
        let spline = NaturalCubicSpline::fit(&knots).expect("Fit sollte gelingen");
        // Erste Ableitung links/rechts von x = 0.4
        let h = 1e-6;
        let left = (spline.evaluate(0.4) - spline.evaluate(0.4 - h)) / h;
        let right = (spline.evaluate(0.4 + h) - spline.evaluate(0.4)) / h;
        assert_abs_diff_eq!(left, right, epsilon = 1e-4);
    }

    #[test]
    fn test_spline_rejects_duplicate_knots() {
        let knots = points(&[(0.0, 0.0), (0.5, 0.2), (0.5, 0.8), (1.0, 1.0)]);
        let err = NaturalCubicSpline::fit(&knots).unwrap_err();
        assert_eq!(err, SplineError::DuplicateKnots { index: 2 });
    }

    #[test]
    fn test_spline_rejects_too_few_points() {
        let knots = points(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            NaturalCubicSpline::fit(&knots).unwrap_err(),
            SplineError::TooFewPoints(2)
        );
    }

    #[test]
    fn test_sample_line_identity() {
        let line = sample_line(DVec2::ZERO, DVec2::ONE, 5);
        assert_eq!(line.len(), 5);
        for p in line {
            assert_relative_eq!(p.x, p.y);
        }
    }

    #[test]
    fn test_piecewise_linear_with_duplicate_x() {
        let knots = points(&[(0.0, 0.0), (0.5, 0.2), (0.5, 0.8), (1.0, 1.0)]);
        let samples = sample_piecewise_linear(&knots, 5);
        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[1].y, 0.1);
        assert_relative_eq!(samples[3].y, 0.9);
        assert_relative_eq!(samples[4].y, 1.0);
    }

    #[test]
    fn test_piecewise_linear_all_same_x_runs_vertically() {
        let knots = points(&[(0.4, 0.0), (0.4, 0.5), (0.4, 1.0)]);
        let samples = sample_piecewise_linear(&knots, 3);
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|p| p.x == 0.4));
        assert_relative_eq!(samples[0].y, 0.0);
        assert_relative_eq!(samples[2].y, 1.0);
    }
}
