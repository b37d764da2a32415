//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;
use glam::Vec2;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Editing ===
            AppCommand::BeginDrag { point_id, offset } => {
                handlers::editing::begin_drag(state, point_id, offset)
            }
            AppCommand::AddPointAndDrag { curve_pos } => {
                handlers::editing::add_point_and_drag(state, curve_pos)
            }
            AppCommand::DragPointTo { screen_pos } => {
                handlers::editing::drag_point_to(state, screen_pos)
            }
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::RemovePoint { point_id } => handlers::editing::remove_point(state, point_id),

            // === Datei-I/O ===
            AppCommand::SaveCurve => handlers::file_io::save(state)?,
            AppCommand::LoadCurve { path } => handlers::file_io::load(state, &path)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, hover_pos: Option<Vec2>) -> RenderScene {
        render_scene::build(state, hover_pos)
    }
}
