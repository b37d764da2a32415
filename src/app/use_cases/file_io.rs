//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, InteractionState};
use crate::curve_file::{parse_curve_file, write_curve_file};
use anyhow::Context;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Lädt eine Kurvendatei und ersetzt bei Erfolg alle Kontrollpunkte.
///
/// Bei Lese- oder Formatfehlern bleibt das Modell unverändert.
pub fn load_curve_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let result = std::fs::read_to_string(path)
        .with_context(|| format!("Datei {} konnte nicht gelesen werden", path.display()))
        .and_then(|content| {
            parse_curve_file(&content)
                .with_context(|| format!("Ungültiges Kurvenformat in {}", path.display()))
        });

    let curve_file = match result {
        Ok(curve_file) => curve_file,
        Err(e) => {
            log::warn!("Kurvendatei abgelehnt: {:#}", e);
            state.ui.status_message = Some(format!("Laden fehlgeschlagen: {:#}", e));
            return Err(e);
        }
    };

    state.curve.replace_points(&curve_file.points);
    state.interaction = InteractionState::Idle;
    state.ui.current_file_path = Some(path.to_path_buf());

    let msg = format!(
        "{} Kontrollpunkte aus {} geladen",
        state.curve.len(),
        path.display()
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Speichert die aktuelle Kurve unter einem Zeitstempel-Dateinamen in `output_dir`.
///
/// Mit weniger als zwei Punkten wird nichts geschrieben.
pub fn save_curve(state: &mut AppState) -> anyhow::Result<()> {
    let now = chrono::Local::now().naive_local();
    save_curve_at(state, now)
}

/// Wie [`save_curve`], mit explizitem Zeitstempel.
pub fn save_curve_at(state: &mut AppState, timestamp: NaiveDateTime) -> anyhow::Result<()> {
    if state.curve.len() < 2 {
        let msg = "Zu wenige Kontrollpunkte zum Speichern (mindestens 2)";
        log::warn!("{}", msg);
        state.ui.status_message = Some(msg.to_string());
        return Ok(());
    }

    let curve = state.curve.interpolate(state.options.export_samples);
    let content = write_curve_file(&state.curve.positions(), &curve);

    let dir = state.options.output_dir.clone();
    let result = std::fs::create_dir_all(&dir)
        .with_context(|| format!("Verzeichnis {} konnte nicht angelegt werden", dir.display()))
        .and_then(|_| {
            write_new_file(&dir, &curve_file_stem(&timestamp), &content).with_context(|| {
                format!("Kurvendatei in {} konnte nicht geschrieben werden", dir.display())
            })
        });

    let path = match result {
        Ok(path) => path,
        Err(e) => {
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {:#}", e));
            return Err(e);
        }
    };

    log::info!("Kurve gespeichert: {}", path.display());
    log::info!("  Kontrollpunkte: {}", state.curve.len());
    log::info!("  Samples: {}", curve.len());
    if let Some((min, max)) = curve.y_range() {
        log::info!("  Y-Bereich: [{:.6}, {:.6}]", min, max);
    }

    state.ui.status_message = Some(format!("Gespeichert: {}", path.display()));
    state.ui.last_saved_path = Some(path);
    Ok(())
}

/// Dateiname ohne Endung: `curve_YYYYmmdd_HHMMSS`.
pub fn curve_file_stem(timestamp: &NaiveDateTime) -> String {
    format!("curve_{}", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Legt `stem.txt`, sonst `stem_1.txt`, `stem_2.txt`, … exklusiv an und schreibt
/// `content` hinein. Bestehende Dateien werden nie überschrieben.
fn write_new_file(dir: &Path, stem: &str, content: &str) -> std::io::Result<PathBuf> {
    for n in 0u32.. {
        let path = match n {
            0 => dir.join(format!("{stem}.txt")),
            n => dir.join(format!("{stem}_{n}.txt")),
        };
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(mut file) => {
                file.write_all(content.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(std::io::ErrorKind::AlreadyExists.into())
}
