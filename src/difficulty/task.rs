//! Task timing and performance history.

use crate::difficulty::error::DifficultyError;
use crate::difficulty::summary::SessionSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Attempt window of the task in progress.
///
/// Reset after every resolved task, whether it was scored or missed out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskWindow {
    started_at: Option<DateTime<Utc>>,
    attempts: u32,
}

impl TaskWindow {
    /// Record the start time unless one is already recorded.
    ///
    /// Returns whether this call started the task.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Count one more attempt and return the new total.
    pub fn record_attempt(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts
    }

    /// Seconds since the task started, or `None` if it never started.
    ///
    /// A clock that went backwards yields zero.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> Option<f64> {
        self.started_at.map(|started| {
            now.signed_duration_since(started)
                .to_std()
                .unwrap_or(Duration::ZERO)
                .as_secs_f64()
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Outcome of one scored task.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// `1 / attempts`, in (0, 1].
    pub precision: f64,
    /// Seconds from task start to score.
    pub elapsed_time: f64,
}

impl PerformanceSample {
    pub fn is_valid(&self) -> bool {
        self.precision > 0.0 && self.precision <= 1.0 && self.elapsed_time >= 0.0
    }
}

/// Append-only log of scored tasks for the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHistory {
    samples: Vec<PerformanceSample>,
}

impl PerformanceHistory {
    pub fn push(&mut self, sample: PerformanceSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[PerformanceSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic means over every sample.
    ///
    /// Fails with [`DifficultyError::EmptyHistory`] rather than dividing by zero.
    pub fn summarize(&self) -> Result<SessionSummary, DifficultyError> {
        if self.samples.is_empty() {
            return Err(DifficultyError::EmptyHistory);
        }

        let count = self.samples.len() as f64;
        let (precision, elapsed) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(p, e), s| (p + s.precision, e + s.elapsed_time));

        Ok(SessionSummary {
            task_count: self.samples.len(),
            average_precision: precision / count,
            average_elapsed_time: elapsed / count,
        })
    }
}
