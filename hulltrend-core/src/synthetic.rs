//! Deterministic synthetic bar generation for demos, tests, and benches.
//!
//! Uses a seeded linear congruential generator so a series is reproducible
//! without pulling in `rand`: same seed, same bars, on every platform.

use crate::domain::Bar;
use chrono::NaiveDate;

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    /// Next pseudo-random value in [-1, 1).
    fn next_unit(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Generate `n` sane 4-hour bars: a slow sine drift with seeded noise on
/// top, so trends and reversals both occur at realistic scales.
pub fn synthetic_bars(n: usize, seed: u64) -> Vec<Bar> {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut rng = Lcg::new(seed);
    let mut close = 1800.0;

    (0..n)
        .map(|i| {
            let open = close;
            let drift = (i as f64 * 0.045).sin() * 7.0;
            close += drift + rng.next_unit() * 5.0;
            let high = open.max(close) + rng.next_unit().abs() * 4.0;
            let low = open.min(close) - rng.next_unit().abs() * 4.0;
            let volume = 25_000.0 + rng.next_unit().abs() * 10_000.0;
            Bar {
                timestamp: base + chrono::Duration::hours(4 * i as i64),
                open,
                high,
                low,
                close,
                volume,
            }
        })
        .collect()
}
