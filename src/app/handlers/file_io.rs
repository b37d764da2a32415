//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Lädt eine Kurve aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::load_curve_file(state, path)
}

/// Speichert die aktuelle Kurve mit Zeitstempel-Dateinamen.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_curve(state)
}
