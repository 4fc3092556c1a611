//! Collaborators the controller calls out to.
//!
//! Each minigame supplies its own implementations. The controller only
//! invokes these; it never reads state back from them.

use crate::difficulty::summary::{SessionId, SessionSummary};
use std::fmt;

/// Minigame-specific difficulty knobs (target size, spawn cadence, speed).
pub trait GameManager {
    fn increase_difficulty(&mut self);

    fn decrease_difficulty(&mut self);

    /// Called when the session goal is reached, before the summary is saved.
    fn session_goal_reached(&mut self) {}
}

/// Persistence of finished sessions.
pub trait SessionStore {
    fn save_session_data(&mut self, summary: &SessionSummary, session_id: &SessionId, minigame: &str);
}

/// UI notification that difficulty changed.
pub trait DifficultyFeedback {
    fn notify_difficulty_changed(&mut self, is_increase: bool);
}

/// Names of the ports, for reporting missing collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collaborator {
    GameManager,
    SessionStore,
    Feedback,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GameManager => "game manager",
            Self::SessionStore => "session store",
            Self::Feedback => "difficulty feedback",
        };
        f.write_str(name)
    }
}
