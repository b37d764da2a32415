//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionState};
use glam::Vec2;

/// Rendert die Status-Bar.
///
/// `hover_pos` ist die Zeigerposition in Canvas-Pixeln aus dem letzten Frame.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, hover_pos: Option<Vec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.curve.len()));

            ui.separator();

            let mode = match state.interaction {
                InteractionState::Idle => "Bereit".to_string(),
                InteractionState::Dragging { point_id, .. } => format!("Ziehe {}", point_id),
            };
            ui.label(mode);

            ui.separator();

            if let Some(pos) = hover_pos {
                let curve_pos = state.mapper().to_curve(pos);
                ui.label(format!("x: {:.3} | y: {:.3}", curve_pos.x, curve_pos.y));
            } else {
                ui.label("x: – | y: –");
            }

            if let Some(ref path) = state.ui.current_file_path {
                ui.separator();
                let filename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unbekannt");
                ui.label(format!("Datei: {}", filename));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Links: Punkt setzen/ziehen | Rechts: löschen | S: speichern");
            });
        });
    });
}
