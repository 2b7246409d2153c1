//! Analysis configuration: validation, TOML loading, content fingerprint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum supported smoothing period. The half-window `period / 2` must
/// itself cover at least 2 samples, so anything below 4 is degenerate.
pub const MIN_PERIOD: usize = 4;

/// Configuration for a single analysis run.
///
/// Validated before any computation; an invalid configuration is fatal to the
/// run and is never silently corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trend smoother window, in bars.
    pub period: usize,

    /// Event window radius: bars examined on each side of a turning point.
    pub event_half_width: usize,

    /// How a slope of exactly zero resolves during turning-point detection.
    pub slope_zero_policy: SlopeZeroPolicy,
}

/// Resolution policy for a slope of exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeZeroPolicy {
    /// A flat slope continues the prior trend; the sign flips only on a
    /// strict positive/negative transition. Keeps exact plateaus from
    /// producing spurious turning points.
    CarryPreviousSign,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            period: 45,
            event_half_width: 5,
            slope_zero_policy: SlopeZeroPolicy::CarryPreviousSign,
        }
    }
}

impl AnalysisConfig {
    pub fn new(period: usize, event_half_width: usize) -> Result<Self, ConfigError> {
        let config = Self {
            period,
            event_half_width,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period < MIN_PERIOD {
            return Err(ConfigError::PeriodTooSmall(self.period));
        }
        if self.event_half_width == 0 {
            return Err(ConfigError::ZeroHalfWidth);
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration; missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two runs with identical configs share a fingerprint, which together
    /// with the pipeline's purity makes reports reproducible bit for bit.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("AnalysisConfig must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("period must be >= {MIN_PERIOD}, got {0}")]
    PeriodTooSmall(usize),

    #[error("event_half_width must be >= 1")]
    ZeroHalfWidth,

    #[error("invalid config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.period, 45);
        assert_eq!(config.event_half_width, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_small_period() {
        for period in 0..MIN_PERIOD {
            assert!(matches!(
                AnalysisConfig::new(period, 5),
                Err(ConfigError::PeriodTooSmall(_))
            ));
        }
        assert!(AnalysisConfig::new(MIN_PERIOD, 5).is_ok());
    }

    #[test]
    fn rejects_zero_half_width() {
        assert!(matches!(
            AnalysisConfig::new(45, 0),
            Err(ConfigError::ZeroHalfWidth)
        ));
    }

    #[test]
    fn toml_roundtrip_with_defaults() {
        let config = AnalysisConfig::from_toml_str("period = 20\n").unwrap();
        assert_eq!(config.period, 20);
        assert_eq!(config.event_half_width, 5);
        assert_eq!(
            config.slope_zero_policy,
            SlopeZeroPolicy::CarryPreviousSign
        );
    }

    #[test]
    fn toml_rejects_invalid_period() {
        assert!(AnalysisConfig::from_toml_str("period = 2\n").is_err());
    }

    #[test]
    fn fingerprint_is_stable_and_config_sensitive() {
        let a = AnalysisConfig::default();
        let b = AnalysisConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let c = AnalysisConfig::new(46, 5).unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }
}
