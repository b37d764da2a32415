//! Kontrollpunkt mit stabiler Identität.

use glam::DVec2;
use std::fmt;

/// Stabile Identität eines Kontrollpunkts, unabhängig von seiner Position in der Sequenz.
///
/// Wird bei der Erzeugung monoton vergeben und nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Vom Benutzer gesetzter Ankerpunkt im Kurvenraum [0,1]×[0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Identität des Punkts
    pub id: PointId,
    /// Position im Kurvenraum (geklemmt auf [0,1])
    pub position: DVec2,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt. Klemmt die Position nicht.
    pub fn new(id: PointId, position: DVec2) -> Self {
        Self { id, position }
    }

    /// x-Koordinate im Kurvenraum
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// y-Koordinate im Kurvenraum
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Klemmt eine Kurvenraum-Position auf das Einheitsquadrat.
pub fn clamp_to_unit(position: DVec2) -> DVec2 {
    position.clamp(DVec2::ZERO, DVec2::ONE)
}
