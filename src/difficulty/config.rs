//! Difficulty controller configuration.

use crate::difficulty::error::DifficultyError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found while validating a [`DifficultyConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("precision_threshold_high must lie in (0, 1), got {0}")]
    HighThresholdOutOfRange(f64),

    #[error("precision_threshold_low must lie in (0, 1), got {0}")]
    LowThresholdOutOfRange(f64),

    #[error("precision_threshold_low ({low}) must be below precision_threshold_high ({high})")]
    ThresholdsInverted { low: f64, high: f64 },

    #[error("counter_threshold must be greater than zero")]
    ZeroCounterThreshold,

    #[error("consecutive_miss_limit must be greater than zero")]
    ZeroMissLimit,
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Tuning knobs of a [`DifficultyController`](crate::difficulty::DifficultyController).
///
/// Missing fields take their default when deserialized, so hosts can
/// override a single option:
///
/// ```rust
/// use midway::difficulty::DifficultyConfig;
///
/// let config: DifficultyConfig = serde_json::from_str(r#"{"counter_threshold": 5}"#).unwrap();
/// assert_eq!(config.counter_threshold, 5);
/// assert_eq!(config.consecutive_miss_limit, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Precision at or above which a task counts as excelling.
    pub precision_threshold_high: f64,
    /// Precision at or below which a task counts as struggling.
    pub precision_threshold_low: f64,
    /// Counter value that triggers a difficulty change.
    pub counter_threshold: u32,
    /// Misses within one task that force a difficulty decrease.
    pub consecutive_miss_limit: u32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            precision_threshold_high: 0.7,
            precision_threshold_low: 0.34,
            counter_threshold: 3,
            consecutive_miss_limit: 4,
        }
    }
}

impl DifficultyConfig {
    /// Check every constraint and report all violations together.
    pub fn validate(&self) -> Result<(), DifficultyError> {
        let high = self.precision_threshold_high;
        let low = self.precision_threshold_low;

        let checks = vec![
            check(
                in_unit_interval(high),
                ConfigViolation::HighThresholdOutOfRange(high),
            ),
            check(
                in_unit_interval(low),
                ConfigViolation::LowThresholdOutOfRange(low),
            ),
            check(low < high, ConfigViolation::ThresholdsInverted { low, high }),
            check(
                self.counter_threshold > 0,
                ConfigViolation::ZeroCounterThreshold,
            ),
            check(
                self.consecutive_miss_limit > 0,
                ConfigViolation::ZeroMissLimit,
            ),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(DifficultyError::InvalidConfig(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn in_unit_interval(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

fn check(ok: bool, violation: ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
