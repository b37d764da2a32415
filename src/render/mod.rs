//! Zeichnen der RenderScene mit dem egui-Painter.
//!
//! Der Renderer ist zustandslos: Jeder Frame erzeugt die Shapes neu aus der
//! Szene. Reihenfolge: Hintergrund, Raster, Kurve, Kontrollpunkte.

mod shapes;

pub use crate::shared::RenderScene;
pub use shapes::scene_shapes;

/// Zeichnet die komplette Szene in den Canvas, dessen linke obere Ecke bei
/// `origin` liegt.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    painter.extend(scene_shapes(scene, origin));
}
