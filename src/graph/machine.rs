//! State graph that drives behaviors through their lifecycle.

use crate::core::{normalize_name, Behavior, State, StateHistory, StateTransition, Trigger};
use crate::graph::transition::{Transition, TransitionError};
use chrono::Utc;
use tracing::{debug, warn};

/// Boxed behavior as stored by a graph.
pub type BoxedBehavior<S, T, C> = Box<dyn Behavior<S, T, C>>;

/// Execution engine holding named states and transitions, with exactly one
/// active state.
///
/// Graphs are created with
/// [`StateGraphBuilder`](crate::builder::StateGraphBuilder): after
/// `wire()` and `start()` the first declared state is active.
pub struct StateGraph<S: State, T: Trigger, C> {
    ids: Vec<S>,
    behaviors: Vec<BoxedBehavior<S, T, C>>,
    transitions: Vec<Transition<S, T>>,
    current: usize,
    history: StateHistory<S, T>,
}

impl<S: State, T: Trigger, C> StateGraph<S, T, C> {
    /// Activate the first behavior. Callers guarantee `behaviors` is
    /// non-empty, wired, and parallel to `ids`.
    pub(crate) fn start(
        ids: Vec<S>,
        behaviors: Vec<BoxedBehavior<S, T, C>>,
        transitions: Vec<Transition<S, T>>,
        history: StateHistory<S, T>,
        ctx: &mut C,
    ) -> Self {
        let mut graph = Self {
            ids,
            behaviors,
            transitions,
            current: 0,
            history,
        };
        debug!(state = graph.ids[0].name(), "state graph started");
        graph.behaviors[0].enter(ctx);
        graph
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.ids[self.current]
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[S] {
        &self.ids
    }

    pub fn transitions(&self) -> &[Transition<S, T>] {
        &self.transitions
    }

    pub fn history(&self) -> &StateHistory<S, T> {
        &self.history
    }

    /// Run the active behavior for one update step.
    pub fn tick(&mut self, ctx: &mut C) {
        self.behaviors[self.current].execute(ctx);
    }

    /// Check whether `trigger` would currently select a transition (pure)
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.find(trigger).is_some()
    }

    /// Take the first transition, in declaration order, that answers
    /// `trigger` from the current state.
    ///
    /// Returns the new current state. When nothing matches, the graph is
    /// left untouched and [`TransitionError::NoTransition`] is returned.
    pub fn request_transition(&mut self, trigger: &T, ctx: &mut C) -> Result<&S, TransitionError> {
        let Some(index) = self.find(trigger) else {
            let from = self.current_state().name().to_string();
            warn!(trigger = trigger.name(), from = %from, "no matching transition");
            return Err(TransitionError::NoTransition {
                trigger: trigger.name().to_string(),
                from,
            });
        };

        let to = self.transitions[index].to.clone();
        // Endpoints were checked against the declared states by wire().
        let Some(next) = self.ids.iter().position(|id| *id == to) else {
            let from = self.current_state().name().to_string();
            warn!(trigger = trigger.name(), to = to.name(), "transition target is not a declared state");
            return Err(TransitionError::NoTransition {
                trigger: trigger.name().to_string(),
                from,
            });
        };

        let from = self.current_state().clone();
        self.behaviors[self.current].exit(ctx);
        self.current = next;
        self.behaviors[self.current].enter(ctx);

        debug!(
            trigger = trigger.name(),
            from = from.name(),
            to = to.name(),
            "transition taken"
        );
        self.history.record(StateTransition {
            from,
            to,
            trigger: trigger.clone(),
            timestamp: Utc::now(),
        });

        Ok(self.current_state())
    }

    /// Resolve `name` to a trigger and request it.
    ///
    /// The name is trimmed and case-folded before lookup.
    pub fn request_transition_named(
        &mut self,
        name: &str,
        ctx: &mut C,
    ) -> Result<&S, TransitionError> {
        match T::parse(name) {
            Some(trigger) => self.request_transition(&trigger, ctx),
            None => {
                let name = normalize_name(name);
                warn!(name = %name, "unknown transition name");
                Err(TransitionError::UnknownTrigger { name })
            }
        }
    }

    fn find(&self, trigger: &T) -> Option<usize> {
        let current = self.current_state();
        self.transitions
            .iter()
            .position(|t| t.matches(trigger, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateGraphBuilder;
    use crate::{state_enum, trigger_enum};

    state_enum! {
        enum Dog {
            Idle,
            Fetch,
            Return,
        }
    }

    trigger_enum! {
        enum Cue {
            Thrown,
            Grabbed,
            Delivered,
            Recall,
        }
    }

    /// Lifecycle calls, as "<hook>:<state>".
    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
    }

    struct Probe(Dog);

    impl Behavior<Dog, Cue, Log> for Probe {
        fn id(&self) -> Dog {
            self.0.clone()
        }

        fn enter(&mut self, ctx: &mut Log) {
            ctx.calls.push(format!("enter:{}", self.0.name()));
        }

        fn execute(&mut self, ctx: &mut Log) {
            ctx.calls.push(format!("execute:{}", self.0.name()));
        }

        fn exit(&mut self, ctx: &mut Log) {
            ctx.calls.push(format!("exit:{}", self.0.name()));
        }
    }

    fn fetch_graph(log: &mut Log) -> StateGraph<Dog, Cue, Log> {
        StateGraphBuilder::new()
            .state(Probe(Dog::Idle))
            .state(Probe(Dog::Fetch))
            .state(Probe(Dog::Return))
            .add_transition(Transition::new(Cue::Thrown, Dog::Idle, Dog::Fetch))
            .add_transition(Transition::new(Cue::Grabbed, Dog::Fetch, Dog::Return))
            .add_transition(Transition::new(Cue::Delivered, Dog::Return, Dog::Idle))
            .add_transition(Transition::wildcard(Cue::Recall, Dog::Idle))
            .wire()
            .unwrap()
            .start(log)
    }

    #[test]
    fn start_enters_first_state() {
        let mut log = Log::default();
        let graph = fetch_graph(&mut log);

        assert_eq!(graph.current_state(), &Dog::Idle);
        assert_eq!(log.calls, vec!["enter:Idle"]);
    }

    #[test]
    fn tick_executes_only_current_state() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        graph.tick(&mut log);
        graph.tick(&mut log);

        assert_eq!(log.calls, vec!["enter:Idle", "execute:Idle", "execute:Idle"]);
        assert_eq!(graph.current_state(), &Dog::Idle);
    }

    #[test]
    fn transition_exits_then_enters() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        let next = graph.request_transition(&Cue::Thrown, &mut log).unwrap();
        assert_eq!(next, &Dog::Fetch);
        assert_eq!(log.calls, vec!["enter:Idle", "exit:Idle", "enter:Fetch"]);
        assert_eq!(graph.history().len(), 1);
    }

    #[test]
    fn unmatched_request_leaves_state_unchanged() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        let result = graph.request_transition(&Cue::Delivered, &mut log);

        assert_eq!(
            result,
            Err(TransitionError::NoTransition {
                trigger: "Delivered".to_string(),
                from: "Idle".to_string(),
            })
        );
        assert_eq!(graph.current_state(), &Dog::Idle);
        assert_eq!(log.calls, vec!["enter:Idle"]);
        assert!(graph.history().is_empty());
    }

    #[test]
    fn wildcard_fires_from_every_state() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        graph.request_transition(&Cue::Thrown, &mut log).unwrap();
        assert!(graph.can_fire(&Cue::Recall));
        graph.request_transition(&Cue::Recall, &mut log).unwrap();
        assert_eq!(graph.current_state(), &Dog::Idle);

        graph.request_transition(&Cue::Thrown, &mut log).unwrap();
        graph.request_transition(&Cue::Grabbed, &mut log).unwrap();
        graph.request_transition(&Cue::Recall, &mut log).unwrap();
        assert_eq!(graph.current_state(), &Dog::Idle);
    }

    #[test]
    fn wildcard_self_transition_reenters() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        graph.request_transition(&Cue::Recall, &mut log).unwrap();

        assert_eq!(log.calls, vec!["enter:Idle", "exit:Idle", "enter:Idle"]);
    }

    #[test]
    fn first_declared_match_wins() {
        let mut log = Log::default();
        let mut graph = StateGraphBuilder::new()
            .state(Probe(Dog::Idle))
            .state(Probe(Dog::Fetch))
            .state(Probe(Dog::Return))
            .add_transition(Transition::wildcard(Cue::Recall, Dog::Return))
            .add_transition(Transition::new(Cue::Recall, Dog::Idle, Dog::Fetch))
            .wire()
            .unwrap()
            .start(&mut log);

        graph.request_transition(&Cue::Recall, &mut log).unwrap();

        assert_eq!(graph.current_state(), &Dog::Return);
    }

    #[test]
    fn named_request_is_normalized() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        graph.request_transition_named("  THROWN ", &mut log).unwrap();
        assert_eq!(graph.current_state(), &Dog::Fetch);

        graph.request_transition_named("grabbed", &mut log).unwrap();
        assert_eq!(graph.current_state(), &Dog::Return);
    }

    #[test]
    fn unknown_name_is_a_lookup_error() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        let result = graph.request_transition_named(" Sit ", &mut log);

        assert_eq!(
            result,
            Err(TransitionError::UnknownTrigger {
                name: "sit".to_string()
            })
        );
        assert_eq!(graph.current_state(), &Dog::Idle);
    }

    #[test]
    fn history_follows_the_path() {
        let mut log = Log::default();
        let mut graph = fetch_graph(&mut log);

        graph.request_transition(&Cue::Thrown, &mut log).unwrap();
        graph.request_transition(&Cue::Grabbed, &mut log).unwrap();
        graph.request_transition(&Cue::Delivered, &mut log).unwrap();

        let path = graph.history().get_path();
        assert_eq!(path, vec![&Dog::Idle, &Dog::Fetch, &Dog::Return, &Dog::Idle]);
    }
}
