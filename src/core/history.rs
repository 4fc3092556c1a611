//! Bounded record of the transitions a state graph has taken.

use super::state::State;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions kept by a [`StateHistory`].
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single transition taken by a graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, T: Trigger> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The trigger that selected the transition
    pub trigger: T,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Transitions in the order they were taken.
///
/// Graphs tick every frame for the whole session, so the history keeps at
/// most `limit` records and drops the oldest one when full.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use midway::core::{StateHistory, StateTransition};
/// use midway::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Disc { Held, Flying, Landed }
/// }
///
/// trigger_enum! {
///     enum Event { Throw, Land }
/// }
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: Disc::Held,
///     to: Disc::Flying,
///     trigger: Event::Throw,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: Disc::Flying,
///     to: Disc::Landed,
///     trigger: Event::Land,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Disc::Held, &Disc::Flying, &Disc::Landed]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, T: Trigger> {
    transitions: VecDeque<StateTransition<S, T>>,
    limit: usize,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` records.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S, T>) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed: the source of the oldest kept record, then the
    /// destination of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest kept records.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S, T>> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S, T>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Dog {
        Idle,
        Fetch,
        Return,
    }

    impl State for Dog {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Fetch => "Fetch",
                Self::Return => "Return",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Cue {
        Thrown,
        Grabbed,
        Delivered,
    }

    impl Trigger for Cue {
        const VARIANTS: &'static [Self] = &[Self::Thrown, Self::Grabbed, Self::Delivered];

        fn name(&self) -> &str {
            match self {
                Self::Thrown => "Thrown",
                Self::Grabbed => "Grabbed",
                Self::Delivered => "Delivered",
            }
        }
    }

    fn step(from: Dog, to: Dog, trigger: Cue) -> StateTransition<Dog, Cue> {
        StateTransition {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Dog, Cue> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(step(Dog::Idle, Dog::Fetch, Cue::Thrown));
        history.record(step(Dog::Fetch, Dog::Return, Cue::Grabbed));
        history.record(step(Dog::Return, Dog::Idle, Cue::Delivered));

        let path = history.get_path();
        assert_eq!(path, vec![&Dog::Idle, &Dog::Fetch, &Dog::Return, &Dog::Idle]);
        assert_eq!(history.last().map(|t| &t.trigger), Some(&Cue::Delivered));
    }

    #[test]
    fn oldest_record_is_evicted_at_limit() {
        let mut history = StateHistory::with_limit(2);
        history.record(step(Dog::Idle, Dog::Fetch, Cue::Thrown));
        history.record(step(Dog::Fetch, Dog::Return, Cue::Grabbed));
        history.record(step(Dog::Return, Dog::Idle, Cue::Delivered));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&Dog::Fetch, &Dog::Return, &Dog::Idle]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = StateHistory::with_limit(0);
        history.record(step(Dog::Idle, Dog::Fetch, Cue::Thrown));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut history = StateHistory::new();
        history.record(StateTransition {
            from: Dog::Idle,
            to: Dog::Fetch,
            trigger: Cue::Thrown,
            timestamp: start,
        });
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));

        history.record(StateTransition {
            from: Dog::Fetch,
            to: Dog::Return,
            trigger: Cue::Grabbed,
            timestamp: start + chrono::Duration::seconds(3),
        });
        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(4);
        history.record(step(Dog::Idle, Dog::Fetch, Cue::Thrown));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Dog, Cue> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), 4);
    }
}
