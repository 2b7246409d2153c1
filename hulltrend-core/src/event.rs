//! Event-window study: short-horizon price reaction around turning points.

use crate::domain::{Bar, Direction};
use crate::stats::{mean, sample_std};
use crate::turning::TurningPoint;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Price reaction around a single turning point.
///
/// The window spans `[index - W, index + W]` clamped to the series; a
/// truncated window is still analyzed, but any metric that needs bars the
/// series does not have is surfaced as absent rather than fabricated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStudy {
    pub index: usize,
    pub timestamp: NaiveDateTime,
    pub direction: Direction,
    /// Close at the flip bar: the reference for all post-event returns.
    pub price_at_event: f64,
    /// Percent return at each offset `1..=half_width` after the event;
    /// entry `k - 1` holds offset `k`, None where the series ends first.
    pub returns_after: Vec<Option<f64>>,
    /// Sample standard deviation (ddof = 1) of close-to-close returns inside
    /// the window. None with fewer than two such returns.
    pub local_volatility: Option<f64>,
    /// The window spans the full `2 * half_width + 1` bars.
    pub is_complete: bool,
}

/// Study a single turning point. `tp.index` must be within `bars`.
pub fn study_event(bars: &[Bar], tp: &TurningPoint, half_width: usize) -> EventStudy {
    let i = tp.index;
    let lo = i.saturating_sub(half_width);
    let hi = (i + half_width).min(bars.len() - 1);
    let window = &bars[lo..=hi];

    let price_at_event = bars[i].close;
    let returns_after: Vec<Option<f64>> = (1..=half_width)
        .map(|k| {
            bars.get(i + k)
                .map(|b| (b.close / price_at_event - 1.0) * 100.0)
        })
        .collect();

    let step_returns: Vec<f64> = window
        .windows(2)
        .map(|pair| pair[1].close / pair[0].close - 1.0)
        .collect();

    EventStudy {
        index: i,
        timestamp: tp.timestamp,
        direction: tp.direction,
        price_at_event,
        returns_after,
        local_volatility: sample_std(&step_returns),
        is_complete: i >= half_width && i + half_width < bars.len(),
    }
}

/// Study every turning point in order.
pub fn study_events(
    bars: &[Bar],
    turning_points: &[TurningPoint],
    half_width: usize,
) -> Vec<EventStudy> {
    turning_points
        .iter()
        .map(|tp| study_event(bars, tp, half_width))
        .collect()
}

/// Aggregate event statistics for one direction class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub direction: Direction,
    pub count: usize,
    /// Mean percent return per post-event horizon; entry `k - 1` holds
    /// horizon `k`, None when no event in the class reaches it.
    pub mean_return_by_horizon: Vec<Option<f64>>,
    pub mean_volatility: Option<f64>,
    /// Fraction of events whose return at their largest available horizon
    /// has the direction-implied sign. Events with no post-event return at
    /// all are left out of the denominator; None when none qualify.
    pub consistency: Option<f64>,
}

impl EventStats {
    pub fn compute(direction: Direction, events: &[EventStudy], half_width: usize) -> Self {
        let class: Vec<&EventStudy> = events.iter().filter(|e| e.direction == direction).collect();

        let mean_return_by_horizon: Vec<Option<f64>> = (0..half_width)
            .map(|k| {
                let at_horizon: Vec<f64> = class
                    .iter()
                    .filter_map(|e| e.returns_after.get(k).copied().flatten())
                    .collect();
                mean(&at_horizon)
            })
            .collect();

        let volatilities: Vec<f64> = class.iter().filter_map(|e| e.local_volatility).collect();

        let mut eligible = 0usize;
        let mut agreeing = 0usize;
        for event in &class {
            if let Some(ret) = event.returns_after.iter().rev().find_map(|r| *r) {
                eligible += 1;
                if direction.matches_sign(ret) {
                    agreeing += 1;
                }
            }
        }

        Self {
            direction,
            count: class.len(),
            mean_return_by_horizon,
            mean_volatility: mean(&volatilities),
            consistency: (eligible > 0).then(|| agreeing as f64 / eligible as f64),
        }
    }
}
