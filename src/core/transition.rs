//! Transition identifiers and table rows.

use super::guard::Guard;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for the names of declared transitions.
///
/// Same contract as [`State`]: a small, comparable, serializable identifier.
/// The [`transition_enum!`](crate::transition_enum) macro generates an
/// implementation for plain enums.
pub trait TransitionId:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the transition's name for diagnostics and error messages.
    fn name(&self) -> &str;
}

/// Action closure run at fire time, after the guard check and before the
/// field is written. Returning `false` aborts the state change.
pub type Action<H> = Arc<dyn Fn(&mut H) -> bool + Send + Sync>;

/// A single row of a transition table: `transition` moves a host instance
/// from `from` to `to`, subject to an optional guard and an optional action.
pub struct TransitionDef<H, S: State, T: TransitionId> {
    pub transition: T,
    pub from: S,
    pub to: S,
    pub guard: Option<Guard<H>>,
    pub action: Option<Action<H>>,
}

impl<H, S: State, T: TransitionId> TransitionDef<H, S, T> {
    /// Structural match: is this row declared under `transition` from
    /// `current`? Ignores the guard.
    pub fn matches(&self, transition: &T, current: &S) -> bool {
        self.transition == *transition && self.from == *current
    }

    /// Guard-filtered availability from `current` (pure).
    pub fn eligible(&self, host: &H, current: &S) -> bool {
        if self.from != *current {
            return false;
        }
        self.guard.as_ref().is_none_or(|guard| guard.check(host))
    }
}

impl<H, S: State, T: TransitionId> Clone for TransitionDef<H, S, T> {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}
