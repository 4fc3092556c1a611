//! State identity for state graphs.
//!
//! A state's identity is its declared name. Graphs compare states by value,
//! so identifiers are usually fieldless enums generated with
//! [`state_enum!`](crate::state_enum).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Identifier of a state in a [`StateGraph`](crate::graph::StateGraph).
///
/// Identifiers are small values: they are cloned into transition records
/// and compared whenever a transition request is resolved.
///
/// # Example
///
/// ```rust
/// use midway::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Companion {
///     Idle,
///     Fetch,
///     Return,
/// }
///
/// impl State for Companion {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Fetch => "Fetch",
///             Self::Return => "Return",
///         }
///     }
/// }
///
/// assert_eq!(Companion::Fetch.name(), "Fetch");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Declared name of the state, used for display and logging.
    fn name(&self) -> &str;
}
