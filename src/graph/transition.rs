//! Transition table entries.

use crate::core::{State, Trigger};
use serde::{Deserialize, Serialize};

/// Errors reported when a transition request cannot be resolved.
///
/// Both are lookup failures: the graph stays in its current state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition '{trigger}' available from state '{from}'")]
    NoTransition { trigger: String, from: String },

    #[error("Unknown transition name '{name}'")]
    UnknownTrigger { name: String },
}

/// An edge of a state graph.
///
/// A transition without a source is a wildcard and applies from any
/// current state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, T: Trigger> {
    pub trigger: T,
    pub from: Option<S>,
    pub to: S,
}

impl<S: State, T: Trigger> Transition<S, T> {
    /// Transition valid only from `from`.
    pub fn new(trigger: T, from: S, to: S) -> Self {
        Self {
            trigger,
            from: Some(from),
            to,
        }
    }

    /// Transition valid from any current state.
    pub fn wildcard(trigger: T, to: S) -> Self {
        Self {
            trigger,
            from: None,
            to,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.from.is_none()
    }

    /// Check if this transition answers `trigger` while in `current` (pure)
    pub fn matches(&self, trigger: &T, current: &S) -> bool {
        if self.trigger != *trigger {
            return false;
        }

        self.from.as_ref().is_none_or(|from| from == current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Arrow {
        Nocked,
        Flying,
        Stuck,
    }

    impl State for Arrow {
        fn name(&self) -> &str {
            match self {
                Self::Nocked => "Nocked",
                Self::Flying => "Flying",
                Self::Stuck => "Stuck",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Shot {
        Loose,
        Hit,
        Reset,
    }

    impl Trigger for Shot {
        const VARIANTS: &'static [Self] = &[Self::Loose, Self::Hit, Self::Reset];

        fn name(&self) -> &str {
            match self {
                Self::Loose => "Loose",
                Self::Hit => "Hit",
                Self::Reset => "Reset",
            }
        }
    }

    #[test]
    fn matches_requires_trigger_and_source() {
        let transition = Transition::new(Shot::Loose, Arrow::Nocked, Arrow::Flying);

        assert!(transition.matches(&Shot::Loose, &Arrow::Nocked));
        assert!(!transition.matches(&Shot::Loose, &Arrow::Flying));
        assert!(!transition.matches(&Shot::Hit, &Arrow::Nocked));
        assert!(!transition.is_wildcard());
    }

    #[test]
    fn wildcard_matches_any_source() {
        let transition = Transition::wildcard(Shot::Reset, Arrow::Nocked);

        assert!(transition.is_wildcard());
        assert!(transition.matches(&Shot::Reset, &Arrow::Nocked));
        assert!(transition.matches(&Shot::Reset, &Arrow::Flying));
        assert!(transition.matches(&Shot::Reset, &Arrow::Stuck));
        assert!(!transition.matches(&Shot::Hit, &Arrow::Stuck));
    }

    #[test]
    fn error_messages_name_the_lookup() {
        let err = TransitionError::NoTransition {
            trigger: "Hit".to_string(),
            from: "Nocked".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition 'Hit' available from state 'Nocked'"
        );
    }
}
