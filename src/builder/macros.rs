//! Macros for ergonomic state and transition declarations.

/// Generate a [`State`](crate::core::State) implementation for a plain enum.
///
/// # Example
///
/// ```
/// use statefield::state_enum;
///
/// state_enum! {
///     pub enum DispatchState {
///         Waiting,
///         Assigned,
///         Accepted,
///     }
/// }
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

/// Generate a [`TransitionId`](crate::core::TransitionId) implementation for
/// a plain enum.
///
/// # Example
///
/// ```
/// use statefield::transition_enum;
///
/// transition_enum! {
///     pub enum DispatchOp {
///         Assign,
///         Accept,
///     }
/// }
/// ```
#[macro_export]
macro_rules! transition_enum {
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

        impl $crate::core::TransitionId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
