//! Core `State` trait for state-field values.
//!
//! Every value a bound field can hold must implement this trait, which
//! provides pure methods for inspecting the value without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the values of a bound state field.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position of a host instance in one
/// of its state fields.
///
/// # Required Traits
///
/// - `Clone`: states are copied between the host field and query results
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: host fields are application data that
///   applications log and persist
///
/// The [`state_enum!`](crate::state_enum) macro generates an
/// implementation for plain enums.
///
/// # Example
///
/// ```rust
/// use statefield::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DispatchState {
///     Waiting,
///     Assigned,
///     Accepted,
/// }
///
/// impl State for DispatchState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Waiting => "Waiting",
///             Self::Assigned => "Assigned",
///             Self::Accepted => "Accepted",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for diagnostics and error messages.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Waiting,
        Assigned,
        Accepted,
        Cancelled,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Waiting => "Waiting",
                Self::Assigned => "Assigned",
                Self::Accepted => "Accepted",
                Self::Cancelled => "Cancelled",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Waiting.name(), "Waiting");
        assert_eq!(TestState::Assigned.name(), "Assigned");
        assert_eq!(TestState::Accepted.name(), "Accepted");
        assert_eq!(TestState::Cancelled.name(), "Cancelled");
    }

    #[test]
    fn state_is_cloneable() {
        let state = TestState::Assigned;
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Assigned;
        let state2 = TestState::Assigned;
        let state3 = TestState::Accepted;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Waiting;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
