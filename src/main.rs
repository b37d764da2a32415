//! Curve Editor.
//!
//! Interaktiver Editor für eine interpolierende Kurve im Einheitsquadrat.
//! Kontrollpunkte werden mit der Maus gesetzt, gezogen und gelöscht;
//! `S` speichert die abgetastete Kurve als Textdatei.

use clap::Parser;
use curve_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use std::path::PathBuf;

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(name = "curve-editor", version, about)]
struct Cli {
    /// Kurvendatei, die beim Start geladen wird
    path: Option<PathBuf>,

    /// Alternative Optionen-Datei (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Zielverzeichnis für gespeicherte Kurven
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    AppRunner::run(Cli::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(cli: Cli) -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 600.0])
                .with_title("Curve Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Curve Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(cli)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(cli: Cli) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
        let mut editor_options = EditorOptions::load_from_file(&config_path);
        if let Some(dir) = cli.output_dir {
            editor_options.output_dir = dir;
        }

        let mut state = AppState::new();
        state.options = editor_options;

        let mut app = Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        };

        if let Some(path) = cli.path {
            app.process_events(vec![AppIntent::LoadRequested { path }]);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state, self.input.hover_pos());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self.input.collect_canvas_events(ui, rect);
                self.process_events(events);

                let scene = self
                    .controller
                    .build_render_scene(&self.state, self.input.hover_pos());
                render::paint_scene(ui.painter(), rect.min, &scene);
            });

        ctx.request_repaint_after(self.state.options.frame_interval());

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
