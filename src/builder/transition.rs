//! Fluent declaration of a single transition.

use crate::core::{Action, Guard, State, TransitionDef, TransitionId};
use std::sync::Arc;

/// Declaration of one transition, passed to [`TableBuilder::allow`].
///
/// The transition name and both states are required up front; the guard and
/// the action are optional and attached fluently.
///
/// [`TableBuilder::allow`]: crate::builder::TableBuilder::allow
///
/// # Example
///
/// ```rust
/// use statefield::builder::TransitionDecl;
/// use statefield::{state_enum, transition_enum};
///
/// state_enum! {
///     enum DispatchState { Waiting, Assigned }
/// }
///
/// transition_enum! {
///     enum DispatchOp { Assign }
/// }
///
/// struct Job {
///     driver_nearby: bool,
/// }
///
/// let decl: TransitionDecl<Job, _, _> = TransitionDecl::new(
///     DispatchOp::Assign,
///     DispatchState::Waiting,
///     DispatchState::Assigned,
/// )
/// .when(|job: &Job| job.driver_nearby);
/// ```
pub struct TransitionDecl<H, S: State, T: TransitionId> {
    transition: T,
    from: S,
    to: S,
    guard: Option<Guard<H>>,
    action: Option<Action<H>>,
}

impl<H, S: State, T: TransitionId> TransitionDecl<H, S, T> {
    /// Declare `transition` moving a host from `from` to `to`.
    pub fn new(transition: T, from: S, to: S) -> Self {
        Self {
            transition,
            from,
            to,
            guard: None,
            action: None,
        }
    }

    /// Attach a guard predicate (optional). Replaces any previous guard.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach a pre-built guard (optional).
    pub fn guard(mut self, guard: Guard<H>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach an action closure (optional). The action runs at fire time
    /// after the guard check; returning `false` aborts the state change.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut H) -> bool + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    pub(crate) fn into_def(self) -> TransitionDef<H, S, T> {
        TransitionDef {
            transition: self.transition,
            from: self.from,
            to: self.to,
            guard: self.guard,
            action: self.action,
        }
    }
}
