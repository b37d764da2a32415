//! Handler für Viewport-Zustand.

use crate::app::AppState;

/// Setzt die Canvas-Größe, aus der der Koordinaten-Mapper abgeleitet wird.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
