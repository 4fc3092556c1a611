//! Adaptive difficulty control.
//!
//! The controller watches one task at a time. Each scored task yields a
//! precision of `1 / attempts`, which nudges two hysteresis counters:
//!
//! - `excel` grows on precise tasks and triggers a difficulty increase at
//!   the counter threshold
//! - `struggle` grows on imprecise tasks and triggers a decrease
//!
//! Too many misses inside a single task force a decrease immediately.
//! When the session goal is reached the history is averaged into a
//! [`SessionSummary`] and handed to the [`SessionStore`].

mod config;
mod controller;
mod counters;
mod error;
mod ports;
mod summary;
mod task;

pub use config::{ConfigViolation, DifficultyConfig};
pub use controller::{
    AdjustmentStats, DifficultyChange, DifficultyController, DifficultyControllerBuilder,
};
pub use counters::DifficultyCounters;
pub use error::DifficultyError;
pub use ports::{Collaborator, DifficultyFeedback, GameManager, SessionStore};
pub use summary::{SessionId, SessionSummary};
pub use task::{PerformanceHistory, PerformanceSample, TaskWindow};
