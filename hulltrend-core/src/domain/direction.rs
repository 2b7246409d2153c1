//! Trend direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a turning point or of the segment it opens.
///
/// `Up` means the trend slope flipped from negative to positive (long bias
/// from here to the next flip); `Down` is the mirror case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// True when a signed percentage move agrees with this direction.
    pub fn matches_sign(self, pct: f64) -> bool {
        match self {
            Direction::Up => pct > 0.0,
            Direction::Down => pct < 0.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_agreement() {
        assert!(Direction::Up.matches_sign(0.5));
        assert!(!Direction::Up.matches_sign(-0.5));
        assert!(Direction::Down.matches_sign(-0.5));
        // A flat move agrees with neither direction.
        assert!(!Direction::Up.matches_sign(0.0));
        assert!(!Direction::Down.matches_sign(0.0));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}
