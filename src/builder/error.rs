//! Declaration-time errors.

use thiserror::Error;

/// Errors raised while declaring or finalizing a transition table.
///
/// These are fatal configuration mistakes: the declaration itself must be
/// fixed, there is nothing to retry at runtime.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown source state '{state}'; declare it first with initial_state or other_states")]
    UnknownSourceState { state: String },

    #[error("unknown target state '{state}'; declare it first with initial_state or other_states")]
    UnknownTargetState { state: String },

    #[error("already defined transition '{transition}' from '{from}' state")]
    DuplicateTransition { transition: String, from: String },

    #[error("initial state not defined")]
    MissingInitialState,
}
