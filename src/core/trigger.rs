//! Transition triggers.
//!
//! Transitions are requested by trigger rather than by raw string. Hosts that
//! compose graphs from declarative tables can still use names: a name is
//! normalized and resolved to a trigger once, and the trigger is used from
//! then on.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Normalize a transition name for lookup.
///
/// Surrounding whitespace is trimmed and the name is case-folded.
///
/// ```rust
/// use midway::core::normalize_name;
///
/// assert_eq!(normalize_name("  Pick Up "), "pick up");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Identifier of a transition in a [`StateGraph`](crate::graph::StateGraph).
///
/// Usually generated with [`trigger_enum!`](crate::trigger_enum), which also
/// fills in [`Trigger::VARIANTS`].
pub trait Trigger:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every trigger of this type, in declaration order.
    const VARIANTS: &'static [Self];

    /// Declared name of the trigger.
    fn name(&self) -> &str;

    /// Resolve a name to a trigger, ignoring surrounding whitespace and case.
    fn parse(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::VARIANTS
            .iter()
            .find(|t| normalize_name(t.name()) == wanted)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Throw {
        Release,
        Land,
        PickUp,
    }

    impl Trigger for Throw {
        const VARIANTS: &'static [Self] = &[Self::Release, Self::Land, Self::PickUp];

        fn name(&self) -> &str {
            match self {
                Self::Release => "Release",
                Self::Land => "Land",
                Self::PickUp => "PickUp",
            }
        }
    }

    #[test]
    fn normalize_trims_and_folds_case() {
        assert_eq!(normalize_name("Land"), "land");
        assert_eq!(normalize_name("\tLAND \n"), "land");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Throw::parse("release"), Some(Throw::Release));
        assert_eq!(Throw::parse("  PICKUP  "), Some(Throw::PickUp));
        assert_eq!(Throw::parse("Land"), Some(Throw::Land));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Throw::parse("Catch"), None);
        assert_eq!(Throw::parse("Pick Up"), None);
        assert_eq!(Throw::parse(""), None);
    }
}
