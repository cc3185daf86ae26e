//! Runtime surface: the per-instance machine handle and its results.
//!
//! Everything here operates on a finalized [`Table`](crate::core::Table);
//! the host's field remains the single source of truth for current state.

mod handle;
mod outcome;

pub use handle::Machine;
pub use outcome::{FireOutcome, TransitionError};
