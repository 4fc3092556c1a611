//! Build errors for state graphs and transitions.

use thiserror::Error;

/// Errors that can occur when composing a state graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("No states declared. Add at least one state before .wire()")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Transition '{trigger}' refers to undeclared state '{state}'")]
    UndeclaredState { trigger: String, state: String },

    #[error("Transition trigger not specified. Call .on(trigger) or .named(name)")]
    MissingTrigger,

    #[error("Transition source not specified. Call .from(state) or .from_any()")]
    MissingSource,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTarget,

    #[error("Unknown transition name '{name}'")]
    UnknownTrigger { name: String },

    #[error("Wiring state '{state}' failed: {reason}")]
    WiringFailed { state: String, reason: String },
}
