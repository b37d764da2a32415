//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln (Hover und Klick-Treffer).
pub const PICK_RADIUS_PX: f32 = 8.0;

// ── Abtastung ───────────────────────────────────────────────────────

/// Abtastpunkte der angezeigten Kurve.
pub const DISPLAY_SAMPLES: usize = 200;
/// Abtastpunkte der gespeicherten Kurve.
pub const EXPORT_SAMPLES: usize = 1000;

// ── Frame-Loop ──────────────────────────────────────────────────────

/// Ziel-Bildrate des Frame-Loops.
pub const FRAME_RATE: f32 = 60.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Anzahl der Raster-Unterteilungen je Achse.
pub const GRID_DIVISIONS: u32 = 10;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH: f32 = 3.0;
/// Umrandungsstärke der Kontrollpunkte in Pixeln.
pub const POINT_OUTLINE_WIDTH: f32 = 2.0;
/// Hintergrundfarbe (RGB).
pub const BACKGROUND_COLOR: [u8; 3] = [40, 40, 40];
/// Rasterfarbe (RGB).
pub const GRID_COLOR: [u8; 3] = [80, 80, 80];
/// Kurvenfarbe (RGB: Hellblau).
pub const CURVE_COLOR: [u8; 3] = [100, 200, 255];
/// Füllfarbe der Kontrollpunkte (RGB: Rot).
pub const POINT_COLOR: [u8; 3] = [255, 100, 100];
/// Füllfarbe bei Hover (RGB: Hellrot).
pub const POINT_HOVER_COLOR: [u8; 3] = [255, 150, 150];
/// Umrandungsfarbe der Kontrollpunkte (RGB: Weiß).
pub const POINT_OUTLINE_COLOR: [u8; 3] = [255, 255, 255];

/// Name der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "curve_editor.toml";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Fehlende Felder in der TOML-Datei fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Hover und Klick in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Abtastung ───────────────────────────────────────────────
    /// Abtastpunkte für die Anzeige
    pub display_samples: usize,
    /// Abtastpunkte für den Export
    pub export_samples: usize,

    // ── Frame-Loop ──────────────────────────────────────────────
    /// Ziel-Bildrate
    pub frame_rate: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Zielverzeichnis für gespeicherte Kurven
    pub output_dir: PathBuf,

    // ── Rendering ───────────────────────────────────────────────
    /// Raster-Unterteilungen je Achse
    pub grid_divisions: u32,
    /// Linienstärke der Kurve
    pub curve_width: f32,
    /// Umrandungsstärke der Kontrollpunkte
    pub point_outline_width: f32,
    /// Hintergrundfarbe
    pub background_color: [u8; 3],
    /// Rasterfarbe
    pub grid_color: [u8; 3],
    /// Kurvenfarbe
    pub curve_color: [u8; 3],
    /// Füllfarbe der Kontrollpunkte
    pub point_color: [u8; 3],
    /// Füllfarbe bei Hover
    pub point_hover_color: [u8; 3],
    /// Umrandungsfarbe der Kontrollpunkte
    pub point_outline_color: [u8; 3],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_px: PICK_RADIUS_PX,

            display_samples: DISPLAY_SAMPLES,
            export_samples: EXPORT_SAMPLES,

            frame_rate: FRAME_RATE,

            output_dir: PathBuf::from("."),

            grid_divisions: GRID_DIVISIONS,
            curve_width: CURVE_WIDTH,
            point_outline_width: POINT_OUTLINE_WIDTH,
            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            curve_color: CURVE_COLOR,
            point_color: POINT_COLOR,
            point_hover_color: POINT_HOVER_COLOR,
            point_outline_color: POINT_OUTLINE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("curve_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Zeitintervall zwischen zwei Frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.frame_rate.max(1.0))
    }
}
