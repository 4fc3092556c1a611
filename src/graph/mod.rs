//! Running state graphs.
//!
//! A [`StateGraph`] owns its behaviors and transition table and tracks one
//! active state. Hosts call [`StateGraph::tick`] once per update step and
//! turn gameplay events into transition requests.
//!
//! Failed requests are lookup errors: they are logged, returned to the
//! caller, and leave the graph where it was.

mod machine;
mod transition;

pub use machine::{BoxedBehavior, StateGraph};
pub use transition::{Transition, TransitionError};
