//! Zustand der Zeiger-Interaktion.

use crate::core::PointId;
use glam::Vec2;

/// Transienter Interaktionszustand, nur durch Zeiger-Events verändert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Kein Punkt gehalten
    #[default]
    Idle,
    /// Ein Punkt wird gezogen
    Dragging {
        /// Identität des gezogenen Punkts (übersteht Umsortierung)
        point_id: PointId,
        /// Pixel-Versatz Klickposition − gerenderte Punktposition beim Drag-Start
        offset: Vec2,
    },
}

impl InteractionState {
    /// `true` während eines Drags
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Identität des gezogenen Punkts
    pub fn dragged_point(&self) -> Option<PointId> {
        match self {
            Self::Dragging { point_id, .. } => Some(*point_id),
            Self::Idle => None,
        }
    }
}
