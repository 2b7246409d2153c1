//! hulltrend core — Hull-style trend decomposition for OHLCV series.
//!
//! The pipeline runs strictly forward over a complete, ordered, in-memory
//! bar series:
//! - Trend smoother: chained weighted moving averages with reduced lag,
//!   plus the trend's first difference (slope)
//! - Turning-point detector: slope sign state machine (zero carries the
//!   previous sign)
//! - Segment analyzer: directional excursion metrics between consecutive
//!   turning points, aggregated per direction
//! - Event analyzer: short-horizon reaction windows around each turning
//!   point, aggregated per direction
//!
//! All stages are pure; derived structures are owned, immutable outputs that
//! can be shared or copied freely.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod event;
pub mod segment;
mod stats;
pub mod synthetic;
pub mod trend;
pub mod turning;

pub use analysis::{run_analysis, AnalysisError, AnalysisReport, AnnotatedBar};
pub use config::{AnalysisConfig, ConfigError, SlopeZeroPolicy};
pub use domain::{validate_bars, Bar, BarError, Direction};
pub use event::{EventStats, EventStudy};
pub use segment::{Segment, SegmentError, SegmentStats};
pub use trend::{TrendSeries, TrendSmoother};
pub use turning::TurningPoint;
