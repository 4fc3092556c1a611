//! Difficulty controller errors.

use crate::difficulty::config::ConfigViolation;
use crate::difficulty::ports::Collaborator;
use thiserror::Error;

/// Errors reported by the difficulty controller.
///
/// None of these stop a running session. `InvalidConfig` is returned when a
/// controller is built; the others are logged and the triggering call does
/// nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DifficultyError {
    #[error("Invalid difficulty configuration: {}", join_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(Collaborator),

    #[error("Session summary requested with an empty performance history")]
    EmptyHistory,
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
