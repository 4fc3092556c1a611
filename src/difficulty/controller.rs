//! Adaptive difficulty control loop.

use crate::checkpoint::{ControllerCheckpoint, CHECKPOINT_VERSION};
use crate::difficulty::config::DifficultyConfig;
use crate::difficulty::counters::DifficultyCounters;
use crate::difficulty::error::DifficultyError;
use crate::difficulty::ports::{Collaborator, DifficultyFeedback, GameManager, SessionStore};
use crate::difficulty::summary::{SessionId, SessionSummary};
use crate::difficulty::task::{PerformanceHistory, PerformanceSample, TaskWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Direction of a difficulty change requested from the game manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyChange {
    Increased,
    Decreased,
}

impl DifficultyChange {
    pub fn is_increase(self) -> bool {
        matches!(self, Self::Increased)
    }
}

/// Number of difficulty changes made during the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentStats {
    pub increases: u32,
    pub decreases: u32,
    /// Decreases forced by the consecutive miss limit, also counted in `decreases`.
    pub forced_decreases: u32,
}

/// Evaluates player performance per task and drives difficulty with
/// hysteresis.
///
/// Every call is non-fatal: guard conditions are logged and the call
/// becomes a no-op. Ports that were not supplied are reported once when the
/// controller is built.
///
/// # Example
///
/// ```rust
/// use midway::difficulty::{DifficultyChange, DifficultyConfig, DifficultyController};
///
/// let mut controller = DifficultyController::builder("archery")
///     .config(DifficultyConfig {
///         counter_threshold: 2,
///         ..DifficultyConfig::default()
///     })
///     .build()
///     .unwrap();
///
/// controller.start_task();
/// assert_eq!(controller.record_score(), None);
/// controller.start_task();
/// assert_eq!(controller.record_score(), Some(DifficultyChange::Increased));
/// assert_eq!(controller.counters().excel(), 0);
/// ```
pub struct DifficultyController {
    config: DifficultyConfig,
    session_id: SessionId,
    minigame: String,
    counters: DifficultyCounters,
    task: TaskWindow,
    history: PerformanceHistory,
    stats: AdjustmentStats,
    game_manager: Option<Box<dyn GameManager>>,
    session_store: Option<Box<dyn SessionStore>>,
    feedback: Option<Box<dyn DifficultyFeedback>>,
    missing: Vec<Collaborator>,
}

impl DifficultyController {
    /// Start composing a controller for the named minigame.
    pub fn builder(minigame: impl Into<String>) -> DifficultyControllerBuilder {
        DifficultyControllerBuilder::new(minigame)
    }

    /// Begin timing a new task. Ignored while a task is already in progress.
    ///
    /// Returns whether this call started the task.
    pub fn start_task(&mut self) -> bool {
        self.start_task_at(Utc::now())
    }

    pub fn start_task_at(&mut self, now: DateTime<Utc>) -> bool {
        let started = self.task.start(now);
        if !started {
            debug!("task already in progress, start ignored");
        }
        started
    }

    /// Count a failed attempt in the current task.
    ///
    /// Reaching the consecutive miss limit forces a difficulty decrease and
    /// resets the task window, without touching the hysteresis counters.
    pub fn record_miss(&mut self) -> Option<DifficultyChange> {
        let attempts = self.task.record_attempt();
        let limit = self.config.consecutive_miss_limit;
        debug!(attempts, limit, "miss recorded");

        if attempts < limit {
            return None;
        }

        info!(attempts, limit, "miss limit reached, forcing difficulty decrease");
        self.stats.forced_decreases += 1;
        let change = self.adjust(DifficultyChange::Decreased);
        self.task.reset();
        Some(change)
    }

    /// Resolve the current task as a success.
    pub fn record_score(&mut self) -> Option<DifficultyChange> {
        self.record_score_at(Utc::now())
    }

    pub fn record_score_at(&mut self, now: DateTime<Utc>) -> Option<DifficultyChange> {
        let attempts = self.task.record_attempt();
        let precision = 1.0 / f64::from(attempts);
        let elapsed_time = self.task.elapsed_secs(now).unwrap_or_else(|| {
            warn!("score recorded for a task that was never started, elapsed time taken as zero");
            0.0
        });

        self.history.push(PerformanceSample {
            precision,
            elapsed_time,
        });
        debug!(attempts, precision, elapsed_time, "task scored");

        let change = self.evaluate_performance(precision);
        self.task.reset();
        change
    }

    /// Move the hysteresis counters for one task's precision.
    ///
    /// Precision inside the flow band, strictly between the two thresholds,
    /// relaxes both counters and never changes difficulty.
    pub fn evaluate_performance(&mut self, precision: f64) -> Option<DifficultyChange> {
        if precision >= self.config.precision_threshold_high {
            self.counters.reward();
            self.check_thresholds()
        } else if precision <= self.config.precision_threshold_low {
            self.counters.penalize();
            self.check_thresholds()
        } else {
            self.counters.decay();
            None
        }
    }

    /// At most one change per call; an increase is checked first.
    fn check_thresholds(&mut self) -> Option<DifficultyChange> {
        let threshold = self.config.counter_threshold;
        if self.counters.excel() >= threshold {
            self.counters.reset_excel();
            Some(self.adjust(DifficultyChange::Increased))
        } else if self.counters.struggle() >= threshold {
            self.counters.reset_struggle();
            Some(self.adjust(DifficultyChange::Decreased))
        } else {
            None
        }
    }

    fn adjust(&mut self, change: DifficultyChange) -> DifficultyChange {
        match change {
            DifficultyChange::Increased => {
                self.stats.increases += 1;
                if let Some(manager) = self.game_manager.as_mut() {
                    manager.increase_difficulty();
                }
            }
            DifficultyChange::Decreased => {
                self.stats.decreases += 1;
                if let Some(manager) = self.game_manager.as_mut() {
                    manager.decrease_difficulty();
                }
            }
        }
        if let Some(feedback) = self.feedback.as_mut() {
            feedback.notify_difficulty_changed(change.is_increase());
        }

        info!(
            session = %self.session_id,
            minigame = %self.minigame,
            change = ?change,
            "difficulty changed"
        );
        change
    }

    /// Summarize the session and hand it to the session store.
    ///
    /// With no scored task there is nothing to average: no summary is
    /// produced and the store is not called.
    pub fn on_session_goal_reached(&mut self) -> Option<SessionSummary> {
        if let Some(manager) = self.game_manager.as_mut() {
            manager.session_goal_reached();
        }

        let summary = match self.history.summarize() {
            Ok(summary) => summary,
            Err(err) => {
                debug!(error = %err, "no session summary produced");
                return None;
            }
        };

        info!(
            session = %self.session_id,
            minigame = %self.minigame,
            tasks = summary.task_count,
            average_precision = summary.average_precision,
            average_elapsed_time = summary.average_elapsed_time,
            "session goal reached"
        );
        if let Some(store) = self.session_store.as_mut() {
            store.save_session_data(&summary, &self.session_id, &self.minigame);
        }
        Some(summary)
    }

    /// Snapshot everything except the ports.
    pub fn checkpoint(&self) -> ControllerCheckpoint {
        ControllerCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            session_id: self.session_id,
            minigame: self.minigame.clone(),
            config: self.config.clone(),
            counters: self.counters,
            task: self.task.clone(),
            history: self.history.clone(),
            stats: self.stats,
        }
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn minigame(&self) -> &str {
        &self.minigame
    }

    pub fn counters(&self) -> &DifficultyCounters {
        &self.counters
    }

    pub fn task(&self) -> &TaskWindow {
        &self.task
    }

    pub fn history(&self) -> &PerformanceHistory {
        &self.history
    }

    pub fn stats(&self) -> &AdjustmentStats {
        &self.stats
    }

    /// Ports that were not supplied when the controller was built.
    pub fn missing_collaborators(&self) -> &[Collaborator] {
        &self.missing
    }
}

/// Builder for composing a [`DifficultyController`].
pub struct DifficultyControllerBuilder {
    minigame: String,
    config: DifficultyConfig,
    session_id: Option<SessionId>,
    game_manager: Option<Box<dyn GameManager>>,
    session_store: Option<Box<dyn SessionStore>>,
    feedback: Option<Box<dyn DifficultyFeedback>>,
    resume: Option<ControllerCheckpoint>,
}

impl DifficultyControllerBuilder {
    pub fn new(minigame: impl Into<String>) -> Self {
        Self {
            minigame: minigame.into(),
            config: DifficultyConfig::default(),
            session_id: None,
            game_manager: None,
            session_store: None,
            feedback: None,
            resume: None,
        }
    }

    pub fn config(mut self, config: DifficultyConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a known session id instead of generating one.
    pub fn session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn game_manager(mut self, manager: impl GameManager + 'static) -> Self {
        self.game_manager = Some(Box::new(manager));
        self
    }

    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.session_store = Some(Box::new(store));
        self
    }

    pub fn feedback(mut self, feedback: impl DifficultyFeedback + 'static) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    /// Continue the session captured by `checkpoint`.
    ///
    /// Session id, minigame, config, counters, task window, history and
    /// stats come from the checkpoint; ports must be supplied again.
    pub fn resume(mut self, checkpoint: ControllerCheckpoint) -> Self {
        self.resume = Some(checkpoint);
        self
    }

    /// Build the controller.
    ///
    /// Fails only on an invalid config. Missing ports are logged once here
    /// and listed by [`DifficultyController::missing_collaborators`].
    pub fn build(self) -> Result<DifficultyController, DifficultyError> {
        let mut missing = Vec::new();
        if self.game_manager.is_none() {
            missing.push(Collaborator::GameManager);
        }
        if self.session_store.is_none() {
            missing.push(Collaborator::SessionStore);
        }
        if self.feedback.is_none() {
            missing.push(Collaborator::Feedback);
        }
        for collaborator in &missing {
            let err = DifficultyError::MissingCollaborator(*collaborator);
            warn!(minigame = %self.minigame, error = %err, "difficulty controller composed without a port");
        }

        let mut controller = DifficultyController {
            config: self.config,
            session_id: self.session_id.unwrap_or_default(),
            minigame: self.minigame,
            counters: DifficultyCounters::default(),
            task: TaskWindow::default(),
            history: PerformanceHistory::default(),
            stats: AdjustmentStats::default(),
            game_manager: self.game_manager,
            session_store: self.session_store,
            feedback: self.feedback,
            missing,
        };

        if let Some(checkpoint) = self.resume {
            debug!(checkpoint = %checkpoint.id, session = %checkpoint.session_id, "resuming session");
            controller.config = checkpoint.config;
            controller.session_id = checkpoint.session_id;
            controller.minigame = checkpoint.minigame;
            controller.counters = checkpoint.counters;
            controller.task = checkpoint.task;
            controller.history = checkpoint.history;
            controller.stats = checkpoint.stats;
        }

        controller.config.validate()?;
        Ok(controller)
    }
}
