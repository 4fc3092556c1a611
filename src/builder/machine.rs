//! Two-phase builder for state graphs.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::builder::wiring::Wiring;
use crate::core::{Behavior, State, StateHistory, Trigger, DEFAULT_HISTORY_LIMIT};
use crate::graph::{BoxedBehavior, StateGraph, Transition};
use tracing::debug;

/// Builder for composing a state graph with a fluent API.
///
/// Construction happens in two phases. [`wire`](Self::wire) validates the
/// graph and runs every behavior's `wire` hook; the resulting
/// [`WiredGraph`] can then be [`start`](WiredGraph::start)ed, which enters
/// the first declared state.
///
/// # Example
///
/// ```
/// use midway::builder::StateGraphBuilder;
/// use midway::core::Behavior;
/// use midway::graph::Transition;
/// use midway::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// trigger_enum! {
///     enum Switch { Flip, Cut }
/// }
///
/// struct Lamp(Light);
///
/// impl Behavior<Light, Switch, u32> for Lamp {
///     fn id(&self) -> Light {
///         self.0.clone()
///     }
///
///     fn enter(&mut self, entries: &mut u32) {
///         *entries += 1;
///     }
/// }
///
/// let mut entries = 0;
/// let mut graph = StateGraphBuilder::new()
///     .state(Lamp(Light::Off))
///     .state(Lamp(Light::On))
///     .add_transition(Transition::new(Switch::Flip, Light::Off, Light::On))
///     .add_transition(Transition::wildcard(Switch::Cut, Light::Off))
///     .wire()
///     .unwrap()
///     .start(&mut entries);
///
/// graph.request_transition(&Switch::Flip, &mut entries).unwrap();
/// assert_eq!(graph.current_state(), &Light::On);
/// assert_eq!(entries, 2);
/// ```
pub struct StateGraphBuilder<S: State, T: Trigger, C> {
    behaviors: Vec<BoxedBehavior<S, T, C>>,
    transitions: Vec<Transition<S, T>>,
    history_limit: usize,
}

impl<S: State, T: Trigger, C> StateGraphBuilder<S, T, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
            transitions: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Declare a state. The first declared state is entered on start.
    pub fn state<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<S, T, C> + 'static,
    {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, T>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Number of transitions kept in the graph's history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Validate the graph and wire every behavior in declaration order.
    ///
    /// No behavior is entered until [`WiredGraph::start`] is called.
    pub fn wire(mut self) -> Result<WiredGraph<S, T, C>, BuildError> {
        if self.behaviors.is_empty() {
            return Err(BuildError::NoStates);
        }

        let ids: Vec<S> = self.behaviors.iter().map(|b| b.id()).collect();
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(BuildError::DuplicateState {
                    state: id.name().to_string(),
                });
            }
        }

        for transition in &self.transitions {
            let endpoints = transition.from.iter().chain(std::iter::once(&transition.to));
            for state in endpoints {
                if !ids.contains(state) {
                    return Err(BuildError::UndeclaredState {
                        trigger: transition.trigger.name().to_string(),
                        state: state.name().to_string(),
                    });
                }
            }
        }

        for (id, behavior) in ids.iter().zip(self.behaviors.iter_mut()) {
            behavior.wire(&Wiring::new(id, &ids, &self.transitions))?;
        }
        debug!(
            states = ids.len(),
            transitions = self.transitions.len(),
            "state graph wired"
        );

        Ok(WiredGraph {
            ids,
            behaviors: self.behaviors,
            transitions: self.transitions,
            history_limit: self.history_limit,
        })
    }
}

impl<S: State, T: Trigger, C> Default for StateGraphBuilder<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated, fully wired graph that has not been started yet.
///
/// Only [`StateGraphBuilder::wire`] produces one.
pub struct WiredGraph<S: State, T: Trigger, C> {
    ids: Vec<S>,
    behaviors: Vec<BoxedBehavior<S, T, C>>,
    transitions: Vec<Transition<S, T>>,
    history_limit: usize,
}

impl<S: State, T: Trigger, C> WiredGraph<S, T, C> {
    pub fn states(&self) -> &[S] {
        &self.ids
    }

    /// Enter the first declared state and hand over the running graph.
    pub fn start(self, ctx: &mut C) -> StateGraph<S, T, C> {
        StateGraph::start(
            self.ids,
            self.behaviors,
            self.transitions,
            StateHistory::with_limit(self.history_limit),
            ctx,
        )
    }
}
