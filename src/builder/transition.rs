//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{normalize_name, State, Trigger};
use crate::graph::Transition;

enum TriggerSpec<T> {
    Known(T),
    Named(String),
}

/// Builder for constructing transitions with a fluent API.
///
/// The source must be given explicitly, either as a state or as
/// [`from_any`](Self::from_any) for a wildcard.
pub struct TransitionBuilder<S: State, T: Trigger> {
    trigger: Option<TriggerSpec<T>>,
    from: Option<Option<S>>,
    to: Option<S>,
}

impl<S: State, T: Trigger> TransitionBuilder<S, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            from: None,
            to: None,
        }
    }

    /// Set the trigger (required, or use `named`).
    pub fn on(mut self, trigger: T) -> Self {
        self.trigger = Some(TriggerSpec::Known(trigger));
        self
    }

    /// Set the trigger by name. The name is resolved when the transition is built.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.trigger = Some(TriggerSpec::Named(name.into()));
        self
    }

    /// Set the source state.
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(Some(state));
        self
    }

    /// Allow the transition from any current state.
    pub fn from_any(mut self) -> Self {
        self.from = Some(None);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, T>, BuildError> {
        let trigger = match self.trigger.ok_or(BuildError::MissingTrigger)? {
            TriggerSpec::Known(trigger) => trigger,
            TriggerSpec::Named(name) => T::parse(&name).ok_or_else(|| BuildError::UnknownTrigger {
                name: normalize_name(&name),
            })?,
        };
        let from = self.from.ok_or(BuildError::MissingSource)?;
        let to = self.to.ok_or(BuildError::MissingTarget)?;

        Ok(Transition { trigger, from, to })
    }
}

impl<S: State, T: Trigger> Default for TransitionBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
