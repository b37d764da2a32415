//! Das Kurvenmodell: sortierte Kontrollpunkte plus Interpolation.

use super::point::{clamp_to_unit, ControlPoint, PointId};
use super::spline::{sample_line, sample_piecewise_linear, NaturalCubicSpline};
use glam::DVec2;

/// Abgetastete Kurve: `samples` Punkte mit gleichmäßig verteilten x-Werten.
///
/// Wird pro Frame bzw. pro Speichervorgang neu erzeugt und nie als
/// Modellzustand gehalten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    /// Abtastpunkte in Kurvenraum, x monoton nicht fallend
    pub points: Vec<DVec2>,
    /// `true`, wenn der Spline-Fit scheiterte und linear interpoliert wurde
    pub used_fallback: bool,
}

impl SampledCurve {
    /// Anzahl der Abtastpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn keine Abtastpunkte vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator über die y-Werte
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Minimum und Maximum der y-Werte (None bei leerer Kurve)
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y_values().fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((min, max)) => Some((min.min(y), max.max(y))),
        })
    }
}

/// Geordnete Menge von Kontrollpunkten, stets aufsteigend nach x sortiert.
///
/// Punkte mit gleichem x werden nach ihrer Erzeugungs-ID geordnet.
#[derive(Debug, Clone)]
pub struct CurveModel {
    points: Vec<ControlPoint>,
    next_id: u64,
}

impl CurveModel {
    /// Standard-Kurve: Diagonale von (0,0) nach (1,1).
    pub fn new() -> Self {
        let mut model = Self::empty();
        model.add_point(DVec2::ZERO);
        model.add_point(DVec2::ONE);
        model
    }

    /// Leeres Modell ohne Punkte.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            next_id: 1,
        }
    }

    /// Baut ein Modell aus einer Punktliste über den normalen Einfüge-Pfad
    /// (Klemmen + Sortieren).
    pub fn from_positions(positions: &[DVec2]) -> Self {
        let mut model = Self::empty();
        for &position in positions {
            model.add_point(position);
        }
        model
    }

    /// Alle Kontrollpunkte in Sortierreihenfolge
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Positionen aller Kontrollpunkte in Sortierreihenfolge
    pub fn positions(&self) -> Vec<DVec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Anzahl der Kontrollpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn keine Kontrollpunkte vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt mit der gegebenen Identität
    pub fn point(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Aktueller Sequenz-Index eines Punkts
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// Klemmt, fügt ein, sortiert neu. Gibt die Identität des neuen Punkts zurück.
    ///
    /// Verschiebt ggf. die Indizes bestehender Punkte.
    pub fn add_point(&mut self, position: DVec2) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points
            .push(ControlPoint::new(id, clamp_to_unit(position)));
        self.sort();
        id
    }

    /// Verschiebt den Punkt mit Identität `id`. Gibt `false` zurück, wenn er nicht existiert.
    pub fn move_point(&mut self, id: PointId, position: DVec2) -> bool {
        let Some(point) = self.points.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        point.position = clamp_to_unit(position);
        self.sort();
        true
    }

    /// Verschiebt den Punkt am Sequenz-Index. Gibt die Identität zurück, über die
    /// der Aufrufer den neuen Index nach dem Sortieren auflösen kann.
    pub fn move_point_at(&mut self, index: usize, position: DVec2) -> Option<PointId> {
        let id = self.points.get(index)?.id;
        self.move_point(id, position);
        Some(id)
    }

    /// Entfernt den Punkt mit Identität `id`.
    pub fn remove_point(&mut self, id: PointId) -> Option<ControlPoint> {
        let index = self.index_of(id)?;
        Some(self.points.remove(index))
    }

    /// Entfernt den Punkt am Sequenz-Index; ungültige Indizes sind ein No-op.
    pub fn remove_point_at(&mut self, index: usize) -> Option<ControlPoint> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Ersetzt alle Punkte über den normalen Einfüge-Pfad. IDs laufen weiter.
    pub fn replace_points(&mut self, positions: &[DVec2]) {
        self.points.clear();
        for &position in positions {
            self.add_point(position);
        }
    }

    /// Erzeugt eine abgetastete Kurve mit exakt `samples` Punkten.
    ///
    /// - < 2 Punkte: leer
    /// - 2 Punkte: Gerade
    /// - ≥ 3 Punkte: natürlicher kubischer Spline, bei degenerierter Eingabe
    ///   stückweise linear über dasselbe Raster
    pub fn interpolate(&self, samples: usize) -> SampledCurve {
        let positions = self.positions();
        match positions.as_slice() {
            [] | [_] => SampledCurve::default(),
            [start, end] => SampledCurve {
                points: sample_line(*start, *end, samples),
                used_fallback: false,
            },
            knots => match NaturalCubicSpline::fit(knots) {
                Ok(spline) => SampledCurve {
                    points: spline.sample(samples),
                    used_fallback: false,
                },
                Err(e) => {
                    log::debug!("Spline-Fit fehlgeschlagen ({}), lineare Interpolation", e);
                    SampledCurve {
                        points: sample_piecewise_linear(knots, samples),
                        used_fallback: true,
                    }
                }
            },
        }
    }

    fn sort(&mut self) {
        self.points
            .sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.id.cmp(&b.id)));
    }
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}
