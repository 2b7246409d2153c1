//! CSV bar loading.

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use hulltrend_core::Bar;
use std::path::Path;

#[derive(Debug, serde::Deserialize)]
struct BarRow {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

/// Read bars from a CSV file with header
/// `timestamp,open,high,low,close,volume`.
///
/// Timestamps accept `%Y-%m-%d %H:%M:%S` or RFC 3339. Rows are returned in
/// file order; validation against the bar invariants happens in the core at
/// the start of the analysis run.
pub fn load_bars_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open bar CSV {}", path.display()))?;

    let mut bars = Vec::new();
    for (i, row) in reader.deserialize::<BarRow>().enumerate() {
        // Header is line 1, first record line 2.
        let line = i + 2;
        let row = row.with_context(|| format!("bad CSV record at line {line}"))?;
        let timestamp = parse_timestamp(&row.timestamp)
            .with_context(|| format!("bad timestamp at line {line}"))?;
        bars.push(Bar {
            timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }
    Ok(bars)
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(ts);
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.naive_utc());
    }
    bail!("unrecognized timestamp format: {raw}")
}
