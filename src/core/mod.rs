//! Core-Domänentypen: Kontrollpunkte, Kurvenmodell, Koordinaten-Mapping, Spline-Mathematik.

pub mod curve;
pub mod mapper;
pub mod picking;
pub mod point;
/// Interpolations-Algorithmen (natürlicher Spline, linearer Fallback)
pub mod spline;

pub use curve::{CurveModel, SampledCurve};
pub use mapper::CoordinateMapper;
pub use picking::{is_within_pick_radius, pick_point, PickHit};
pub use point::{clamp_to_unit, ControlPoint, PointId};
pub use spline::{NaturalCubicSpline, SplineError};
