//! Full analysis pipeline: bars in, trend decomposition report out.
//!
//! Data flows strictly forward: bars → smoothed trend + slope → turning
//! points → (segments, event windows) → per-direction aggregates. Every
//! stage is a pure function of its inputs and each produces a new owned
//! structure; nothing downstream mutates an upstream output.

use crate::config::{AnalysisConfig, ConfigError};
use crate::domain::{validate_bars, Bar, BarError, Direction};
use crate::event::{study_events, EventStats, EventStudy};
use crate::segment::{build_segments, Segment, SegmentError, SegmentStats};
use crate::trend::{TrendSeries, TrendSmoother};
use crate::turning::{detect_turning_points, TurningPoint};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can abort an analysis run. Insufficient data is not in
/// here: a series shorter than the warm-up yields empty outputs, not an
/// error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bar(#[from] BarError),

    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// One row of the augmented bar table: the input bar plus the derived trend
/// columns. Undefined entries (warm-up, NaN propagation) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedBar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub trend: Option<f64>,
    pub slope: Option<f64>,
    pub marker: Option<Direction>,
}

/// Owned, immutable result of one analysis run.
///
/// Serializes cleanly (absent values are `null`, never NaN or infinity), so
/// two runs over the same input compare bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    /// blake3 hash of the canonical config serialization.
    pub fingerprint: String,
    pub bar_count: usize,
    /// Warm-up length of the trend smoother for this config.
    pub warmup: usize,
    pub annotated: Vec<AnnotatedBar>,
    pub turning_points: Vec<TurningPoint>,
    pub segments: Vec<Segment>,
    pub up_segments: SegmentStats,
    pub down_segments: SegmentStats,
    pub events: Vec<EventStudy>,
    pub up_events: EventStats,
    pub down_events: EventStats,
}

impl AnalysisReport {
    pub fn segment_stats(&self, direction: Direction) -> &SegmentStats {
        match direction {
            Direction::Up => &self.up_segments,
            Direction::Down => &self.down_segments,
        }
    }

    pub fn event_stats(&self, direction: Direction) -> &EventStats {
        match direction {
            Direction::Up => &self.up_events,
            Direction::Down => &self.down_events,
        }
    }
}

/// Run the full pipeline over an ordered bar series.
///
/// The configuration is validated first, then the bars; computation only
/// starts on clean input. Errors are local to this run.
pub fn run_analysis(bars: &[Bar], config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    config.validate()?;
    validate_bars(bars)?;

    let smoother = TrendSmoother::new(config.period)?;
    let trend = smoother.compute(bars);
    let turning_points = detect_turning_points(bars, &trend.slope);
    let segments = build_segments(bars, &turning_points)?;
    let events = study_events(bars, &turning_points, config.event_half_width);

    let up_segments = SegmentStats::compute(Direction::Up, &segments);
    let down_segments = SegmentStats::compute(Direction::Down, &segments);
    let up_events = EventStats::compute(Direction::Up, &events, config.event_half_width);
    let down_events = EventStats::compute(Direction::Down, &events, config.event_half_width);

    Ok(AnalysisReport {
        config: config.clone(),
        fingerprint: config.fingerprint(),
        bar_count: bars.len(),
        warmup: trend.warmup,
        annotated: annotate(bars, &trend, &turning_points),
        turning_points,
        segments,
        up_segments,
        down_segments,
        events,
        up_events,
        down_events,
    })
}

fn annotate(bars: &[Bar], trend: &TrendSeries, turning_points: &[TurningPoint]) -> Vec<AnnotatedBar> {
    let mut markers: Vec<Option<Direction>> = vec![None; bars.len()];
    for tp in turning_points {
        markers[tp.index] = Some(tp.direction);
    }
    bars.iter()
        .enumerate()
        .map(|(i, bar)| AnnotatedBar {
            timestamp: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            trend: defined(trend.values[i]),
            slope: defined(trend.slope[i]),
            marker: markers[i],
        })
        .collect()
}

fn defined(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}
