//! Builder API for composing state graphs.
//!
//! Graphs are built in two phases: `wire()` validates the declaration and
//! lets every behavior resolve references to its siblings, then `start()`
//! enters the first state.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
pub mod wiring;

pub use error::BuildError;
pub use machine::{StateGraphBuilder, WiredGraph};
pub use transition::TransitionBuilder;
pub use wiring::Wiring;
