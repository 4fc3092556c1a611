//! Macros for declaring state and trigger identifiers.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use midway::core::State;
/// use midway::state_enum;
///
/// state_enum! {
///     pub enum Companion {
///         Idle,
///         Fetch,
///         Return,
///     }
/// }
///
/// assert_eq!(Companion::Return.name(), "Return");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a fieldless enum and implement [`Trigger`](crate::core::Trigger) for it.
///
/// # Example
///
/// ```
/// use midway::core::Trigger;
/// use midway::trigger_enum;
///
/// trigger_enum! {
///     pub enum FetchEvent {
///         Thrown,
///         PickedUp,
///         Delivered,
///     }
/// }
///
/// assert_eq!(FetchEvent::parse(" pickedup "), Some(FetchEvent::PickedUp));
/// assert_eq!(FetchEvent::VARIANTS.len(), 3);
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
