//! Hull-style trend smoother.
//!
//! Chains three linearly-weighted moving averages to cut the lag of a plain
//! rolling mean: `raw[i] = 2 * WMA(n/2)[i] - WMA(n)[i]`, then a final
//! `WMA(round(sqrt(n)))` pass over `raw`. Output is NaN-padded: entries
//! before the warm-up index are undefined, as is every window that touches a
//! NaN input.

use crate::config::{ConfigError, MIN_PERIOD};
use crate::domain::Bar;

/// Smoothed trend plus its first difference, one entry per input bar.
///
/// Entries `0 .. warmup - 1` of `values` are NaN; `slope[i] = values[i] -
/// values[i-1]` is defined one index later, from `warmup` on.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub period: usize,
    /// Warm-up length: the number of leading entries before the slope is
    /// defined. `values[warmup - 1]` is the first defined smoothed value.
    pub warmup: usize,
    pub values: Vec<f64>,
    pub slope: Vec<f64>,
}

impl TrendSeries {
    /// Index of the first defined slope entry, if the series is long enough.
    pub fn first_slope_index(&self) -> Option<usize> {
        (self.slope.len() > self.warmup).then_some(self.warmup)
    }
}

/// Final smoothing pass window: `round(sqrt(period))`.
pub fn smoothing_window(period: usize) -> usize {
    (period as f64).sqrt().round() as usize
}

/// Warm-up length for `period`.
///
/// `WMA(n)` first resolves at index `n - 1` and the chained
/// `WMA(round(sqrt(n)))` adds `round(sqrt(n)) - 1` more bars, so the first
/// defined smoothed value sits at `(n - 1) + (round(sqrt(n)) - 1)` and the
/// first defined slope one bar later.
pub fn warmup_len(period: usize) -> usize {
    (period - 1) + (smoothing_window(period) - 1) + 1
}

/// Linearly-weighted moving average over `window` samples.
///
/// Weight `k` goes to the sample `window - k` positions back (`k = 1..=window`,
/// most recent weighted heaviest), normalized so the weights sum to 1. NaN
/// inputs poison every window that contains them; they are never skipped or
/// interpolated.
pub fn weighted_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "WMA window must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n < window {
        return result;
    }

    let denom = (window * (window + 1)) as f64 / 2.0;

    // Seed the first window.
    let mut window_sum = 0.0;
    let mut numerator = 0.0;
    let mut nan_in_window = false;
    for (k, &v) in values[..window].iter().enumerate() {
        if v.is_nan() {
            nan_in_window = true;
        }
        window_sum += v;
        numerator += (k + 1) as f64 * v;
    }
    if !nan_in_window {
        result[window - 1] = numerator / denom;
    }

    // Roll forward: the weighted numerator gains `window * entering` and
    // sheds one whole window sum; the plain sum swaps entering for leaving.
    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        numerator = numerator - window_sum + window as f64 * entering;
        window_sum = window_sum - leaving + entering;

        if entering.is_nan() || leaving.is_nan() || nan_in_window {
            // Rolling sums are poisoned once NaN has passed through them;
            // rescan the current window from scratch.
            nan_in_window = false;
            window_sum = 0.0;
            numerator = 0.0;
            for (k, &v) in values[(i + 1 - window)..=i].iter().enumerate() {
                if v.is_nan() {
                    nan_in_window = true;
                }
                window_sum += v;
                numerator += (k + 1) as f64 * v;
            }
            if nan_in_window {
                result[i] = f64::NAN;
                continue;
            }
        }

        result[i] = numerator / denom;
    }

    result
}

fn first_difference(values: &[f64]) -> Vec<f64> {
    let mut slope = vec![f64::NAN; values.len()];
    for i in 1..values.len() {
        slope[i] = values[i] - values[i - 1];
    }
    slope
}

/// Computes the smoothed trend and its slope for a close-price series.
#[derive(Debug, Clone)]
pub struct TrendSmoother {
    period: usize,
}

impl TrendSmoother {
    /// A trend needs at least 2 samples per sub-window, so `period < 4` is
    /// rejected (`period / 2` would collapse to a single sample).
    pub fn new(period: usize) -> Result<Self, ConfigError> {
        if period < MIN_PERIOD {
            return Err(ConfigError::PeriodTooSmall(period));
        }
        Ok(Self { period })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn warmup(&self) -> usize {
        warmup_len(self.period)
    }

    pub fn compute(&self, bars: &[Bar]) -> TrendSeries {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        self.compute_closes(&closes)
    }

    /// A series shorter than the warm-up length yields an entirely-NaN trend;
    /// that is a valid degenerate input, not an error.
    pub fn compute_closes(&self, closes: &[f64]) -> TrendSeries {
        let half = self.period / 2;
        let wma_half = weighted_moving_average(closes, half);
        let wma_full = weighted_moving_average(closes, self.period);
        let raw: Vec<f64> = wma_half
            .iter()
            .zip(&wma_full)
            .map(|(&h, &f)| 2.0 * h - f)
            .collect();
        let values = weighted_moving_average(&raw, smoothing_window(self.period));
        let slope = first_difference(&values);
        TrendSeries {
            period: self.period,
            warmup: self.warmup(),
            values,
            slope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn wma_2_basic() {
        let result = weighted_moving_average(&[1.0, 2.0, 3.0], 2);
        assert!(result[0].is_nan());
        // (1*1 + 2*2) / 3, (1*2 + 2*3) / 3
        assert_approx(result[1], 5.0 / 3.0, DEFAULT_EPSILON);
        assert_approx(result[2], 8.0 / 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn wma_weighs_recent_samples_heavier() {
        // A jump at the end moves the WMA more than the same jump at the
        // start of the window.
        let late = weighted_moving_average(&[1.0, 1.0, 2.0], 3)[2];
        let early = weighted_moving_average(&[2.0, 1.0, 1.0], 3)[2];
        assert!(late > early);
    }

    #[test]
    fn wma_nan_propagation() {
        let values = [10.0, 11.0, f64::NAN, 13.0, 14.0, 15.0];
        let result = weighted_moving_average(&values, 3);
        // Windows touching index 2 are undefined.
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        // Window [13, 14, 15] is clean again.
        assert_approx(result[5], (13.0 + 2.0 * 14.0 + 3.0 * 15.0) / 6.0, DEFAULT_EPSILON);
    }

    #[test]
    fn wma_too_few_values() {
        let result = weighted_moving_average(&[1.0, 2.0], 5);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn smoother_rejects_degenerate_period() {
        assert!(TrendSmoother::new(3).is_err());
        assert!(TrendSmoother::new(4).is_ok());
    }

    #[test]
    fn warmup_arithmetic() {
        // period 45: round(sqrt(45)) = 7, warmup = 44 + 6 + 1.
        assert_eq!(smoothing_window(45), 7);
        assert_eq!(warmup_len(45), 51);
        // period 4: round(sqrt(4)) = 2.
        assert_eq!(warmup_len(4), 5);
    }

    #[test]
    fn linear_series_recovers_slope_exactly() {
        // On p[i] = a + b*i every WMA is linear with the same slope, so the
        // chained construction keeps the slope b at every defined index.
        let closes: Vec<f64> = (0..40).map(|i| 50.0 + 2.5 * i as f64).collect();
        let smoother = TrendSmoother::new(9).unwrap();
        let series = smoother.compute_closes(&closes);

        let first_defined = series.warmup - 1;
        for i in 0..first_defined {
            assert!(series.values[i].is_nan(), "expected NaN at index {i}");
        }
        for i in series.warmup..closes.len() {
            assert_approx(series.slope[i], 2.5, 1e-9);
        }
    }

    #[test]
    fn period_4_linear_series_equals_price() {
        // For even periods the 2*WMA(n/2) - WMA(n) lag corrections cancel
        // exactly on a linear series with n = 4: the trend equals the price.
        let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let smoother = TrendSmoother::new(4).unwrap();
        let series = smoother.compute_closes(&closes);

        assert_eq!(series.warmup, 5);
        for i in 0..4 {
            assert!(series.values[i].is_nan());
        }
        for (i, &close) in closes.iter().enumerate().skip(4) {
            assert_approx(series.values[i], close, 1e-9);
        }
        assert!(series.slope[4].is_nan());
        assert_approx(series.slope[5], 1.0, 1e-9);
    }

    #[test]
    fn shorter_than_warmup_is_all_nan() {
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0]);
        let smoother = TrendSmoother::new(45).unwrap();
        let series = smoother.compute(&bars);
        assert_eq!(series.values.len(), 4);
        assert!(series.values.iter().all(|v| v.is_nan()));
        assert!(series.slope.iter().all(|v| v.is_nan()));
        assert_eq!(series.first_slope_index(), None);
    }

    #[test]
    fn output_length_matches_input() {
        for len in [0usize, 1, 10, 80] {
            let closes: Vec<f64> = (0..len).map(|i| 100.0 + (i as f64).sin()).collect();
            let series = TrendSmoother::new(12).unwrap().compute_closes(&closes);
            assert_eq!(series.values.len(), len);
            assert_eq!(series.slope.len(), len);
        }
    }

    #[test]
    fn nan_close_poisons_downstream_windows() {
        let mut closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        closes[10] = f64::NAN;
        let smoother = TrendSmoother::new(4).unwrap();
        let series = smoother.compute_closes(&closes);

        // Every chained window containing index 10 is undefined: WMA(4)
        // reaches back 3 bars and the final WMA(2) one more.
        for i in 10..=14 {
            assert!(series.values[i].is_nan(), "expected NaN at index {i}");
        }
        assert!(!series.values[15].is_nan());
        // Slope needs two consecutive defined values.
        assert!(series.slope[15].is_nan());
        assert!(!series.slope[16].is_nan());
    }
}
