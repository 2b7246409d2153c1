//! Segment analysis: excursion metrics between consecutive turning points.
//!
//! A segment is the half-open bar range `[tp[i].index, tp[i+1].index)`,
//! tagged with the direction the trend is moving in from `tp[i]`. Stretches
//! before the first or after the last turning point lack a second bound and
//! are excluded — their excursions cannot be compared fairly to complete
//! segments.

use crate::domain::{Bar, Direction};
use crate::stats::{max, mean};
use crate::turning::TurningPoint;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegmentError {
    /// Two consecutive turning points at the same bar index. The detector
    /// always advances at least one bar between flips, so this is corrupted
    /// input, not a case to drop silently.
    #[error("zero-duration segment: consecutive turning points both at index {index}")]
    ZeroDuration { index: usize },
}

/// One directional trend segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: usize,
    pub direction: Direction,
    pub start_index: usize,
    /// Exclusive: the index of the next turning point.
    pub end_index: usize,
    pub start_time: NaiveDateTime,
    /// Timestamp of the segment's last bar (`end_index - 1`).
    pub end_time: NaiveDateTime,
    /// Opening price of the first bar.
    pub start_price: f64,
    /// Closing price of the last bar.
    pub end_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    /// Best-case move in the segment's trade direction, percent of start.
    pub favorable_excursion: f64,
    /// Worst-case move against the trade direction, percent of start.
    pub adverse_excursion: f64,
    /// Signed percent change from start to end price.
    pub net_change: f64,
    /// Bars spanned.
    pub duration: usize,
    /// The net change agrees with the segment's direction.
    pub is_win: bool,
}

/// Build one segment per consecutive turning-point pair.
///
/// Turning-point indices must be strictly increasing and within `bars`.
pub fn build_segments(
    bars: &[Bar],
    turning_points: &[TurningPoint],
) -> Result<Vec<Segment>, SegmentError> {
    let mut segments = Vec::with_capacity(turning_points.len().saturating_sub(1));
    for (id, pair) in turning_points.windows(2).enumerate() {
        let (start, end) = (&pair[0], &pair[1]);
        if end.index <= start.index {
            return Err(SegmentError::ZeroDuration { index: start.index });
        }

        let range = &bars[start.index..end.index];
        let first = &range[0];
        let last = &range[range.len() - 1];
        let start_price = first.open;
        let end_price = last.close;
        let high_price = range.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let low_price = range.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);

        let direction = start.direction;
        let rally = (high_price / start_price - 1.0) * 100.0;
        let decline = (1.0 - low_price / start_price) * 100.0;
        let (favorable_excursion, adverse_excursion) = match direction {
            Direction::Up => (rally, decline),
            Direction::Down => (decline, rally),
        };
        let net_change = (end_price / start_price - 1.0) * 100.0;

        segments.push(Segment {
            id,
            direction,
            start_index: start.index,
            end_index: end.index,
            start_time: first.timestamp,
            end_time: last.timestamp,
            start_price,
            end_price,
            high_price,
            low_price,
            favorable_excursion,
            adverse_excursion,
            net_change,
            duration: end.index - start.index,
            is_win: direction.matches_sign(net_change),
        });
    }
    Ok(segments)
}

/// Aggregate segment statistics for one direction class.
///
/// Means and maxima are absent (`None`) for an empty class; the profit/loss
/// ratio is absent (never infinity) whenever either the winner or loser side
/// is empty or the loser adverse mean is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentStats {
    pub direction: Direction,
    pub count: usize,
    pub wins: usize,
    pub mean_duration: Option<f64>,
    pub max_duration: Option<usize>,
    pub mean_net_change: Option<f64>,
    pub max_net_change: Option<f64>,
    pub mean_favorable_excursion: Option<f64>,
    pub max_favorable_excursion: Option<f64>,
    pub mean_adverse_excursion: Option<f64>,
    pub max_adverse_excursion: Option<f64>,
    pub win_rate: Option<f64>,
    /// Mean favorable excursion of winners over mean adverse excursion of
    /// losers.
    pub profit_loss_ratio: Option<f64>,
}

impl SegmentStats {
    pub fn compute(direction: Direction, segments: &[Segment]) -> Self {
        let class: Vec<&Segment> = segments.iter().filter(|s| s.direction == direction).collect();
        let count = class.len();
        let wins = class.iter().filter(|s| s.is_win).count();

        let durations: Vec<f64> = class.iter().map(|s| s.duration as f64).collect();
        let net_changes: Vec<f64> = class.iter().map(|s| s.net_change).collect();
        let favorable: Vec<f64> = class.iter().map(|s| s.favorable_excursion).collect();
        let adverse: Vec<f64> = class.iter().map(|s| s.adverse_excursion).collect();

        let winner_favorable: Vec<f64> = class
            .iter()
            .filter(|s| s.is_win)
            .map(|s| s.favorable_excursion)
            .collect();
        let loser_adverse: Vec<f64> = class
            .iter()
            .filter(|s| !s.is_win)
            .map(|s| s.adverse_excursion)
            .collect();
        let profit_loss_ratio = match (mean(&winner_favorable), mean(&loser_adverse)) {
            (Some(num), Some(den)) if den > 0.0 => Some(num / den),
            _ => None,
        };

        Self {
            direction,
            count,
            wins,
            mean_duration: mean(&durations),
            max_duration: class.iter().map(|s| s.duration).max(),
            mean_net_change: mean(&net_changes),
            max_net_change: max(&net_changes),
            mean_favorable_excursion: mean(&favorable),
            max_favorable_excursion: max(&favorable),
            mean_adverse_excursion: mean(&adverse),
            max_adverse_excursion: max(&adverse),
            win_rate: (count > 0).then(|| wins as f64 / count as f64),
            profit_loss_ratio,
        }
    }
}
