//! Fire results and call-time errors.

use crate::core::State;
use thiserror::Error;

/// Result of a `fire` call that was dispatched (declared, guard passed).
#[derive(Clone, Debug, PartialEq)]
pub enum FireOutcome<S: State> {
    /// The field now holds the transition's target state.
    Transitioned(S),

    /// The declared action returned `false`; the field is unchanged.
    Aborted,
}

impl<S: State> FireOutcome<S> {
    /// The new state, if the transition completed.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::Transitioned(state) => Some(state),
            Self::Aborted => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Errors raised when querying or firing transitions at runtime.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// Declared for the current state, but the guard evaluated false.
    /// Recoverable: the caller may retry after the host changes.
    #[error("unable to fire '{transition}' due to guard")]
    GuardRejected { transition: String },

    /// Not declared for the current state. A caller logic error, not
    /// retried automatically.
    #[error("invalid transition '{transition}' from '{from}' state")]
    InvalidTransition { transition: String, from: String },

    /// Never declared anywhere in the table. A configuration or caller
    /// mistake, distinct from a legitimate state mismatch.
    #[error("unknown transition '{transition}'; it is not declared in this table")]
    UnknownTransition { transition: String },
}
