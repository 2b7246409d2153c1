//! Bar — the fundamental market data unit.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV bar at one sampling instant.
///
/// Bars are immutable once ingested and form an ordered series with strictly
/// increasing timestamps. The nominal sampling interval (1 bar = 1 hour,
/// 4 hours, ...) is fixed per analysis run; the core never re-derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Returns true if any OHLCV field is non-finite.
    pub fn is_void(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite())
    }

    /// Basic OHLCV sanity check: positive prices, non-negative volume,
    /// `low <= open,close <= high`.
    pub fn is_sane(&self) -> bool {
        self.malformed_reason().is_none()
    }

    /// Why this bar would be rejected at ingestion, if anything.
    pub fn malformed_reason(&self) -> Option<&'static str> {
        if self.is_void() {
            return Some("non-finite field");
        }
        if self.open <= 0.0 || self.high <= 0.0 || self.low <= 0.0 || self.close <= 0.0 {
            return Some("non-positive price");
        }
        if self.volume < 0.0 {
            return Some("negative volume");
        }
        if self.low > self.open.min(self.close) || self.open.max(self.close) > self.high {
            return Some("price ordering violates low <= open,close <= high");
        }
        None
    }
}

#[derive(Debug, Error)]
pub enum BarError {
    #[error("malformed bar at index {index}: {reason}")]
    Malformed { index: usize, reason: &'static str },

    #[error("timestamp at index {index} ({current}) does not follow {previous}")]
    OutOfOrder {
        index: usize,
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },
}

/// Validate a bar series before analysis.
///
/// Rejects the first malformed bar (identifying its index) or the first
/// non-increasing timestamp. A corrupted series never proceeds to analysis;
/// there is no implicit repair.
pub fn validate_bars(bars: &[Bar]) -> Result<(), BarError> {
    for (index, bar) in bars.iter().enumerate() {
        if let Some(reason) = bar.malformed_reason() {
            return Err(BarError::Malformed { index, reason });
        }
        if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
            return Err(BarError::OutOfOrder {
                index,
                previous: bars[index - 1].timestamp,
                current: bar.timestamp,
            });
        }
    }
    Ok(())
}
