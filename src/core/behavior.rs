//! Lifecycle hooks for the behavioral units driven by a state graph.

use super::state::State;
use super::trigger::Trigger;
use crate::builder::{BuildError, Wiring};

/// A behavioral unit owned by a [`StateGraph`](crate::graph::StateGraph).
///
/// The graph calls the hooks in a fixed order:
///
/// - `wire` runs once per behavior, in declaration order, before any
///   behavior is entered.
/// - `enter` and `exit` run exactly once per activation.
/// - `execute` runs once per tick while the behavior is active.
///
/// Data kept for a single activation must be cleared in `exit`.
///
/// `C` is the context the owning agent passes into every hook. It is
/// usually the agent's own data, such as a position or a held object.
pub trait Behavior<S: State, T: Trigger, C> {
    /// State this behavior implements.
    fn id(&self) -> S;

    /// Resolve references to sibling states and triggers.
    fn wire(&mut self, _wiring: &Wiring<'_, S, T>) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter(&mut self, _ctx: &mut C) {}

    fn execute(&mut self, _ctx: &mut C) {}

    fn exit(&mut self, _ctx: &mut C) {}
}
