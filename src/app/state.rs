//! Application State — zentrale Datenhaltung.

use super::interaction::InteractionState;
use super::CommandLog;
use crate::core::{CoordinateMapper, CurveModel};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// View-bezogener Zustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Canvas-Größe in Pixeln, jeden Frame neu gesetzt
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (800×600).
    pub fn new() -> Self {
        Self {
            viewport_size: [800.0, 600.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-bezogener Zustand (Statusmeldungen, Dateipfade)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Statusmeldung für die Status-Bar
    pub status_message: Option<String>,
    /// Zuletzt erfolgreich geladene Datei
    pub current_file_path: Option<PathBuf>,
    /// Zuletzt erfolgreich geschriebene Datei
    pub last_saved_path: Option<PathBuf>,
}

/// Haupt-Anwendungszustand
pub struct AppState {
    /// Das Kurvenmodell
    pub curve: CurveModel,
    /// Zeiger-Interaktion (Idle/Dragging)
    pub interaction: InteractionState,
    /// View-Zustand
    pub view: ViewState,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Anwendung soll im nächsten Frame beendet werden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Standard-Kurve.
    pub fn new() -> Self {
        Self {
            curve: CurveModel::new(),
            interaction: InteractionState::Idle,
            view: ViewState::new(),
            ui: UiState::default(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Koordinaten-Mapper für die aktuelle Canvas-Größe.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::from_size(self.view.viewport_size)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
