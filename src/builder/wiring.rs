//! View of a graph under construction, handed to each behavior while wiring.

use crate::builder::error::BuildError;
use crate::core::{normalize_name, State, Trigger};
use crate::graph::Transition;

/// Read-only view of the declared states and transitions.
///
/// Every behavior receives one during `wire()`, before any behavior is
/// entered, so references between sibling states can be resolved without
/// relying on construction order.
pub struct Wiring<'a, S: State, T: Trigger> {
    owner: &'a S,
    states: &'a [S],
    transitions: &'a [Transition<S, T>],
}

impl<'a, S: State, T: Trigger> Wiring<'a, S, T> {
    pub(crate) fn new(owner: &'a S, states: &'a [S], transitions: &'a [Transition<S, T>]) -> Self {
        Self {
            owner,
            states,
            transitions,
        }
    }

    /// State being wired.
    pub fn owner(&self) -> &S {
        self.owner
    }

    pub fn states(&self) -> &[S] {
        self.states
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Fail wiring unless `state` is declared in the graph.
    pub fn require(&self, state: &S) -> Result<(), BuildError> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(self.fail(format!("requires undeclared state '{}'", state.name())))
        }
    }

    /// Transitions that can fire while the owner is active, in declaration order.
    pub fn exits(&self) -> impl Iterator<Item = &'a Transition<S, T>> {
        let owner = self.owner;
        self.transitions
            .iter()
            .filter(move |t| t.from.as_ref().is_none_or(|from| from == owner))
    }

    /// Resolve a transition name to a trigger that can fire from the owner.
    pub fn resolve(&self, name: &str) -> Result<T, BuildError> {
        let trigger = T::parse(name).ok_or_else(|| BuildError::UnknownTrigger {
            name: normalize_name(name),
        })?;

        if self.exits().any(|t| t.trigger == trigger) {
            Ok(trigger)
        } else {
            Err(self.fail(format!(
                "no transition '{}' leaves this state",
                trigger.name()
            )))
        }
    }

    /// Build a wiring error attributed to the owner.
    pub fn fail(&self, reason: impl Into<String>) -> BuildError {
        BuildError::WiringFailed {
            state: self.owner.name().to_string(),
            reason: reason.into(),
        }
    }
}
