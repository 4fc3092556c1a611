//! Checkpoint and resume for difficulty controllers.
//!
//! A checkpoint captures a controller's session progress so a session can
//! continue after the host reloads a scene or restarts. Ports are not part
//! of a checkpoint and must be supplied again when resuming with
//! [`DifficultyControllerBuilder::resume`](crate::difficulty::DifficultyControllerBuilder::resume).
//!
//! Checkpoints encode to JSON or to compact bincode bytes. Storing them is
//! up to the host.

use crate::difficulty::{
    AdjustmentStats, DifficultyConfig, DifficultyCounters, PerformanceHistory, SessionId,
    TaskWindow,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a difficulty controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub session_id: SessionId,

    pub minigame: String,

    pub config: DifficultyConfig,

    pub counters: DifficultyCounters,

    /// Task in progress when the checkpoint was taken
    pub task: TaskWindow,

    pub history: PerformanceHistory,

    pub stats: AdjustmentStats,
}

impl ControllerCheckpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a bincode checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    /// Reject checkpoints this version cannot resume.
    pub fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        self.config
            .validate()
            .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;

        if let Some(index) = self.history.samples().iter().position(|s| !s.is_valid()) {
            return Err(CheckpointError::ValidationFailed(format!(
                "performance sample {index} is out of range"
            )));
        }

        Ok(self)
    }
}
