//! Per-instance machine handle: the transition executor.

use crate::core::{State, Table, TransitionId};
use crate::machine::outcome::{FireOutcome, TransitionError};

/// Binds one host instance to its finalized table.
///
/// A machine holds no state of its own - the host's field is the single
/// source of truth, read and written through the table's binding. Handles
/// are cheap to construct (two references), so they are created on demand
/// rather than cached on the host.
///
/// # Example
///
/// ```rust
/// use statefield::{state_enum, transition_enum, Machine, TableBuilder};
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
///     dispatch_state: Option<DispatchState>,
/// }
///
/// let table = TableBuilder::new(
///     "dispatch_state",
///     |job: &Job| job.dispatch_state.clone(),
///     |job: &mut Job, s| job.dispatch_state = Some(s),
/// )
/// .initial_state(DispatchState::Waiting)
/// .other_states([DispatchState::Assigned])
/// .allow_transition(DispatchOp::Assign, DispatchState::Waiting, DispatchState::Assigned)?
/// .finalize()?;
///
/// let mut job = Job { dispatch_state: None };
/// let mut machine = Machine::new(&table, &mut job);
///
/// assert_eq!(machine.state(), DispatchState::Waiting);
/// machine.fire(&DispatchOp::Assign)?;
/// assert_eq!(job.dispatch_state, Some(DispatchState::Assigned));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Machine<'h, H, S: State, T: TransitionId> {
    table: &'h Table<H, S, T>,
    host: &'h mut H,
}

impl<'h, H, S: State, T: TransitionId> Machine<'h, H, S, T> {
    pub fn new(table: &'h Table<H, S, T>, host: &'h mut H) -> Self {
        Self { table, host }
    }

    /// The host's current state: the stored field value, or the table's
    /// default state if the field was never written.
    pub fn state(&self) -> S {
        self.table.current_state(self.host)
    }

    /// All declared states, in declaration order.
    pub fn all_states(&self) -> &[S] {
        self.table.all_states()
    }

    /// The state a fresh host instance starts in.
    pub fn default_state(&self) -> &S {
        self.table.default_state()
    }

    /// The guard-filtered transitions available right now, in declaration
    /// order. Side-effect-free.
    pub fn allowed_transitions(&self) -> Vec<T> {
        self.table.allowed_transitions(self.host)
    }

    /// Whether `transition` could fire right now. No side effects.
    ///
    /// Fails with [`TransitionError::UnknownTransition`] if `transition` is
    /// not declared anywhere in the table.
    pub fn can_fire(&self, transition: &T) -> Result<bool, TransitionError> {
        if !self.table.is_declared_anywhere(transition) {
            return Err(TransitionError::UnknownTransition {
                transition: transition.name().to_string(),
            });
        }
        Ok(self.allowed_transitions().contains(transition))
    }

    /// Fire `transition`: validate it, run its action, move the field, and
    /// run the table's after-transition hook.
    ///
    /// Execution order is strictly guard check, action, field write,
    /// after-hook; the after-hook observes the already-updated field. An
    /// action returning `false` aborts with [`FireOutcome::Aborted`] and
    /// the field unchanged.
    pub fn fire(&mut self, transition: &T) -> Result<FireOutcome<S>, TransitionError> {
        let table = self.table;

        if !table.is_declared_anywhere(transition) {
            return Err(TransitionError::UnknownTransition {
                transition: transition.name().to_string(),
            });
        }

        let current = table.current_state(self.host);
        let Some(def) = table.find(transition, &current) else {
            return Err(TransitionError::InvalidTransition {
                transition: transition.name().to_string(),
                from: current.name().to_string(),
            });
        };

        if let Some(guard) = def.guard.as_ref() {
            if !guard.check(self.host) {
                tracing::trace!(
                    field = table.field(),
                    transition = transition.name(),
                    from = current.name(),
                    "guard rejected transition"
                );
                return Err(TransitionError::GuardRejected {
                    transition: transition.name().to_string(),
                });
            }
        }

        if let Some(action) = def.action.as_ref() {
            if !action(self.host) {
                tracing::debug!(
                    field = table.field(),
                    transition = transition.name(),
                    from = current.name(),
                    "action aborted transition"
                );
                return Ok(FireOutcome::Aborted);
            }
        }

        table.binding().write(self.host, def.to.clone());
        if let Some(hook) = table.after_hook() {
            hook(self.host);
        }

        tracing::debug!(
            field = table.field(),
            transition = transition.name(),
            from = current.name(),
            to = def.to.name(),
            "transition fired"
        );
        Ok(FireOutcome::Transitioned(def.to.clone()))
    }
}
