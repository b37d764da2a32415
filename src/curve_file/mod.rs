//! Import/Export des Kurven-Textformats.
//!
//! Zeile 1: `<punktanzahl> <sampleanzahl>`, danach ein `x y`-Paar pro
//! Kontrollpunkt in Dateireihenfolge. Gespeicherte Dateien hängen zusätzlich
//! einen y-Wert pro Sample an (x ergibt sich aus dem gleichmäßigen Raster).

pub mod parser;
pub mod writer;

pub use parser::{parse_curve_file, CurveFile};
pub use writer::write_curve_file;

use thiserror::Error;

/// Formatfehler beim Lesen einer Kurvendatei. Zeilennummern sind 1-basiert.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveFileError {
    /// Datei enthält keine Zeilen
    #[error("file is empty")]
    Empty,
    /// Kopfzeile hat nicht genau zwei Tokens
    #[error("header must contain exactly 2 values, found {found}")]
    InvalidHeader { found: usize },
    /// Anzahl in der Kopfzeile ist keine nicht-negative Ganzzahl
    #[error("invalid count '{token}' in line {line}")]
    InvalidCount { line: usize, token: String },
    /// Weniger Punktzeilen als angekündigt
    #[error("not enough control point data: expected {expected} points, found {found}")]
    MissingPoints { expected: usize, found: usize },
    /// Punktzeile hat nicht genau zwei Tokens
    #[error("invalid control point format in line {line}")]
    InvalidPointLine { line: usize },
    /// Koordinate ist keine endliche Gleitkommazahl
    #[error("invalid number '{token}' in line {line}")]
    InvalidNumber { line: usize, token: String },
}
