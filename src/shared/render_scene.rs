//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Positionen liegen bereits in Canvas-Pixeln.

use glam::Vec2;

/// Ein Kontrollpunkt, wie er in diesem Frame gezeichnet wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    /// Mittelpunkt in Canvas-Pixeln
    pub center: Vec2,
    /// Zeiger liegt im Pick-Radius
    pub hovered: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Rasterlinien als Start/Ende-Paare
    pub grid_lines: Vec<[Vec2; 2]>,
    /// Interpolierte Kurve als zusammenhängende Polylinie
    pub curve: Vec<Vec2>,
    /// Kontrollpunkte in Sortierreihenfolge
    pub points: Vec<ScenePoint>,
    /// Radius der Punkt-Kreise (= Pick-Radius)
    pub point_radius: f32,
    /// Stil-Werte für den Renderer
    pub style: SceneStyle,
}

/// Farben und Linienstärken eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneStyle {
    /// Hintergrundfarbe
    pub background: [u8; 3],
    /// Rasterfarbe
    pub grid: [u8; 3],
    /// Kurvenfarbe
    pub curve: [u8; 3],
    /// Linienstärke der Kurve
    pub curve_width: f32,
    /// Füllfarbe der Punkte
    pub point: [u8; 3],
    /// Füllfarbe bei Hover
    pub point_hover: [u8; 3],
    /// Umrandungsfarbe der Punkte
    pub point_outline: [u8; 3],
    /// Umrandungsstärke der Punkte
    pub point_outline_width: f32,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        self.curve.len() > 1
    }
}
