//! Core state graph vocabulary.
//!
//! - State identifiers via the `State` trait
//! - Transition identifiers via the `Trigger` trait
//! - Lifecycle hooks via the `Behavior` trait
//! - Bounded transition history

mod behavior;
mod history;
mod state;
mod trigger;

pub use behavior::Behavior;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
pub use trigger::{normalize_name, Trigger};
