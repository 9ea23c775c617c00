//! Historical Powerball drawing loader.
//!
//! Parses the public drawing-history export
//! (`Draw Date,Winning Numbers,Multiplier`, where the numbers column holds
//! six whitespace-separated integers) into in-memory [`Drawing`] records.
//!
//! The loader owns well-formedness: rows that are short, non-numeric, out of
//! range, or carry duplicate whites are skipped with a warning, so the
//! engine can assume every record it receives is valid. Whites are stored
//! sorted ascending.

use anyhow::{Context, Result};
use powerball_core::models::{
    Drawing, POWERBALL_MAX, POWERBALL_MIN, WHITES_PER_TICKET, WHITE_MAX, WHITE_MIN,
};
use std::fs::File;
use std::path::Path;

/// Row accounting for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows seen (header excluded).
    pub total_rows: usize,
    /// Rows parsed into drawings.
    pub loaded: usize,
    /// Malformed rows dropped.
    pub skipped: usize,
}

/// Loads the drawing history from a CSV file.
///
/// Fails with a descriptive error if the file cannot be opened; malformed
/// rows are skipped, not fatal.
pub fn load_drawings(path: &Path) -> Result<(Vec<Drawing>, LoadStats)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open drawing data: {}", path.display()))?;
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    load_from_reader(reader)
}

/// Loads the drawing history from an in-memory CSV string (header included).
pub fn load_drawings_from_str(csv_text: &str) -> Result<(Vec<Drawing>, LoadStats)> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    load_from_reader(reader)
}

fn load_from_reader<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<(Vec<Drawing>, LoadStats)> {
    let mut drawings = Vec::new();
    let mut stats = LoadStats::default();

    for record in reader.records() {
        stats.total_rows += 1;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                stats.skipped += 1;
                log::warn!("skipping unreadable drawing row {}: {}", stats.total_rows, err);
                continue;
            }
        };
        match parse_row(&record) {
            Some(drawing) => {
                drawings.push(drawing);
                stats.loaded += 1;
            }
            None => {
                stats.skipped += 1;
                log::warn!("skipping malformed drawing row {}", stats.total_rows);
            }
        }
    }

    log::info!(
        "loaded {} historical drawings ({} rows skipped)",
        stats.loaded,
        stats.skipped
    );
    Ok((drawings, stats))
}

fn parse_row(record: &csv::StringRecord) -> Option<Drawing> {
    let date = record.get(0)?.trim();
    let numbers = record.get(1)?.trim();
    if date.is_empty() {
        return None;
    }

    let values: Option<Vec<u8>> = numbers.split_whitespace().map(|n| n.parse().ok()).collect();
    let values = values?;
    if values.len() < WHITES_PER_TICKET + 1 {
        return None;
    }

    let mut whites = [0u8; WHITES_PER_TICKET];
    whites.copy_from_slice(&values[..WHITES_PER_TICKET]);
    let powerball = values[WHITES_PER_TICKET];

    if whites.iter().any(|w| !(WHITE_MIN..=WHITE_MAX).contains(w)) {
        return None;
    }
    if !(POWERBALL_MIN..=POWERBALL_MAX).contains(&powerball) {
        return None;
    }

    whites.sort_unstable();
    if whites.windows(2).any(|pair| pair[0] == pair[1]) {
        return None;
    }

    Some(Drawing { date: date.to_string(), whites, powerball })
}
