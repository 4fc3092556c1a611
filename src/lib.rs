//! Midway: state graphs and adaptive difficulty for minigame agents
//!
//! Two independent subsystems shared by every minigame:
//!
//! - **State graphs** drive behavioral agents such as a fetch-and-return
//!   companion or a thrown disc. A graph owns named states and a table of
//!   triggered transitions, some of which may fire from any state.
//! - **Difficulty control** turns per-task success and failure into
//!   difficulty changes, smoothed by hysteresis counters, and summarizes the
//!   session for persistence.
//!
//! Both run synchronously inside the host's update step and never share
//! mutable state; gameplay events feed each of them separately.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: typed identifiers, usually declared with
//!   [`state_enum!`] and [`trigger_enum!`]
//! - **Behavior**: lifecycle hooks (`wire`, `enter`, `execute`, `exit`)
//! - **StateGraph**: resolves transition requests, first declared match wins
//! - **DifficultyController**: hysteresis loop behind narrow port traits
//!
//! # Example
//!
//! ```rust
//! use midway::builder::StateGraphBuilder;
//! use midway::core::Behavior;
//! use midway::graph::Transition;
//! use midway::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum Disc { Held, Flying, Landed }
//! }
//!
//! trigger_enum! {
//!     enum DiscEvent { Throw, Land, Reset }
//! }
//!
//! /// Counts ticks spent in flight.
//! struct Phase(Disc);
//!
//! impl Behavior<Disc, DiscEvent, u32> for Phase {
//!     fn id(&self) -> Disc {
//!         self.0.clone()
//!     }
//!
//!     fn execute(&mut self, airtime: &mut u32) {
//!         if self.0 == Disc::Flying {
//!             *airtime += 1;
//!         }
//!     }
//! }
//!
//! let mut airtime = 0;
//! let mut disc = StateGraphBuilder::new()
//!     .state(Phase(Disc::Held))
//!     .state(Phase(Disc::Flying))
//!     .state(Phase(Disc::Landed))
//!     .add_transition(Transition::new(DiscEvent::Throw, Disc::Held, Disc::Flying))
//!     .add_transition(Transition::new(DiscEvent::Land, Disc::Flying, Disc::Landed))
//!     .add_transition(Transition::wildcard(DiscEvent::Reset, Disc::Held))
//!     .wire()
//!     .unwrap()
//!     .start(&mut airtime);
//!
//! disc.request_transition(&DiscEvent::Throw, &mut airtime).unwrap();
//! disc.tick(&mut airtime);
//! disc.tick(&mut airtime);
//! disc.request_transition_named(" land ", &mut airtime).unwrap();
//! assert!(disc.request_transition(&DiscEvent::Throw, &mut airtime).is_err());
//! disc.request_transition(&DiscEvent::Reset, &mut airtime).unwrap();
//!
//! assert_eq!(disc.current_state(), &Disc::Held);
//! assert_eq!(airtime, 2);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod difficulty;
pub mod graph;

// Re-export commonly used types
pub use builder::{BuildError, StateGraphBuilder};
pub use core::{Behavior, State, Trigger};
pub use difficulty::{DifficultyConfig, DifficultyController};
pub use graph::{StateGraph, Transition, TransitionError};
