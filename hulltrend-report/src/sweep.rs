//! Multi-period sweep: the same bars analyzed under several smoothing
//! periods.
//!
//! Runs share no state, so they are dispatched in parallel with rayon; the
//! result order follows the requested period order regardless of which run
//! finishes first.

use hulltrend_core::{run_analysis, AnalysisConfig, AnalysisError, AnalysisReport, Bar};
use rayon::prelude::*;

/// Periods to sweep over, all analyzed with the same event half-width.
#[derive(Debug, Clone)]
pub struct PeriodSweep {
    pub periods: Vec<usize>,
    pub event_half_width: usize,
}

/// Outcome of one swept period.
#[derive(Debug)]
pub struct SweepRow {
    pub period: usize,
    pub report: Result<AnalysisReport, AnalysisError>,
}

impl PeriodSweep {
    pub fn new(periods: Vec<usize>, event_half_width: usize) -> Self {
        Self {
            periods,
            event_half_width,
        }
    }

    pub fn run(&self, bars: &[Bar]) -> Vec<SweepRow> {
        self.periods
            .par_iter()
            .map(|&period| {
                let config = AnalysisConfig {
                    period,
                    event_half_width: self.event_half_width,
                    ..AnalysisConfig::default()
                };
                SweepRow {
                    period,
                    report: run_analysis(bars, &config),
                }
            })
            .collect()
    }
}
