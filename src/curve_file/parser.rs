//! Parser für Kurvendateien.

use super::CurveFileError;
use glam::DVec2;

/// Inhalt einer gelesenen Kurvendatei
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFile {
    /// Kontrollpunkte in Dateireihenfolge (nicht sortiert, nicht geklemmt)
    pub points: Vec<DVec2>,
    /// Angekündigte Sample-Anzahl aus der Kopfzeile (beim Laden ungenutzt)
    pub sample_count: usize,
}

/// Parsed eine Kurvendatei aus einem String.
///
/// Zeilen nach dem Punktblock (z.B. die Sample-Werte gespeicherter Dateien)
/// werden ignoriert.
pub fn parse_curve_file(content: &str) -> Result<CurveFile, CurveFileError> {
    let lines: Vec<&str> = content.lines().collect();
    if content.trim().is_empty() {
        return Err(CurveFileError::Empty);
    }
    let Some(header) = lines.first() else {
        return Err(CurveFileError::Empty);
    };

    let header_tokens: Vec<&str> = header.split_whitespace().collect();
    let [point_token, sample_token] = header_tokens.as_slice() else {
        return Err(CurveFileError::InvalidHeader {
            found: header_tokens.len(),
        });
    };
    let point_count = parse_count(point_token)?;
    let sample_count = parse_count(sample_token)?;

    let available = lines.len() - 1;
    if available < point_count {
        return Err(CurveFileError::MissingPoints {
            expected: point_count,
            found: available,
        });
    }

    let points = lines[1..=point_count]
        .iter()
        .enumerate()
        .map(|(offset, line)| parse_point_line(line, offset + 2))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CurveFile {
        points,
        sample_count,
    })
}

fn parse_count(token: &str) -> Result<usize, CurveFileError> {
    token
        .parse::<usize>()
        .map_err(|_| CurveFileError::InvalidCount {
            line: 1,
            token: token.to_string(),
        })
}

fn parse_point_line(line: &str, line_number: usize) -> Result<DVec2, CurveFileError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(CurveFileError::InvalidPointLine { line: line_number });
    };
    Ok(DVec2::new(
        parse_coordinate(x, line_number)?,
        parse_coordinate(y, line_number)?,
    ))
}

fn parse_coordinate(token: &str, line_number: usize) -> Result<f64, CurveFileError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CurveFileError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
        })
}
