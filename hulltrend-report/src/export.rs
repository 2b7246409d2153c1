//! Table export (CSV/JSON).

use anyhow::{Context, Result};
use hulltrend_core::{AnalysisReport, AnnotatedBar, Segment};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Segment table, one row per directional trend segment.
pub fn write_segments_csv(path: &Path, segments: &[Segment]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create segment CSV {}", path.display()))?;

    writeln!(
        file,
        "id,direction,start_time,end_time,start_price,end_price,high_price,low_price,\
favorable_excursion,adverse_excursion,net_change,duration,is_win"
    )?;

    for segment in segments {
        writeln!(
            file,
            "{},{},{},{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{},{}",
            segment.id,
            segment.direction,
            segment.start_time,
            segment.end_time,
            segment.start_price,
            segment.end_price,
            segment.high_price,
            segment.low_price,
            segment.favorable_excursion,
            segment.adverse_excursion,
            segment.net_change,
            segment.duration,
            segment.is_win
        )?;
    }

    Ok(())
}

/// Augmented bar table: OHLCV plus trend, slope, and turning-point marker.
/// Undefined entries are written as empty fields.
pub fn write_annotated_csv(path: &Path, annotated: &[AnnotatedBar]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create annotated CSV {}", path.display()))?;

    writeln!(
        file,
        "timestamp,open,high,low,close,volume,trend,slope,marker"
    )?;

    for row in annotated {
        let trend = row.trend.map_or(String::new(), |v| format!("{v:.6}"));
        let slope = row.slope.map_or(String::new(), |v| format!("{v:.6}"));
        let marker = row.marker.map_or(String::new(), |d| d.to_string());
        writeln!(
            file,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{},{},{}",
            row.timestamp, row.open, row.high, row.low, row.close, row.volume, trend, slope, marker
        )?;
    }

    Ok(())
}

/// Full report as pretty-printed JSON (absent values serialize as null).
pub fn write_report_json(path: &Path, report: &AnalysisReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report JSON {}", path.display()))?;
    Ok(())
}
