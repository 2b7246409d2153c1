//! Turning-point detection from the trend slope.

use crate::domain::{Bar, Direction};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bar index where the effective slope sign flipped.
///
/// Totally ordered by index; `price` is the close of the flip bar and anchors
/// the event study's post-event returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurningPoint {
    pub index: usize,
    pub timestamp: NaiveDateTime,
    pub price: f64,
    pub direction: Direction,
}

/// Effective slope sign while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlopeSign {
    Unknown,
    Positive,
    Negative,
}

impl SlopeSign {
    /// Next state for a defined slope value. Exact zero carries the current
    /// sign forward, so plateaus never reset or flip the trend.
    fn step(self, slope: f64) -> SlopeSign {
        if slope > 0.0 {
            SlopeSign::Positive
        } else if slope < 0.0 {
            SlopeSign::Negative
        } else {
            self
        }
    }
}

/// Scan the slope sequence and emit one turning point per effective sign
/// flip: `up` on negative-to-positive, `down` on positive-to-negative.
///
/// NaN slope entries (warm-up, or gaps propagated from NaN inputs) reset the
/// scan to the unknown state. Nothing fires while the sign is unknown, and
/// the first defined non-zero slope after a reset seeds the sign silently:
/// there is no prior trend to compare against. A series with fewer than two
/// defined slopes therefore yields an empty list, not an error.
pub fn detect_turning_points(bars: &[Bar], slope: &[f64]) -> Vec<TurningPoint> {
    debug_assert_eq!(bars.len(), slope.len());

    let mut points = Vec::new();
    let mut state = SlopeSign::Unknown;
    for (index, &s) in slope.iter().enumerate() {
        if s.is_nan() {
            state = SlopeSign::Unknown;
            continue;
        }
        let next = state.step(s);
        let direction = match (state, next) {
            (SlopeSign::Negative, SlopeSign::Positive) => Some(Direction::Up),
            (SlopeSign::Positive, SlopeSign::Negative) => Some(Direction::Down),
            _ => None,
        };
        if let Some(direction) = direction {
            points.push(TurningPoint {
                index,
                timestamp: bars[index].timestamp,
                price: bars[index].close,
                direction,
            });
        }
        state = next;
    }
    points
}
