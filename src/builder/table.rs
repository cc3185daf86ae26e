//! Builder for declaring and finalizing transition tables.

use crate::builder::error::ConfigError;
use crate::builder::transition::TransitionDecl;
use crate::core::{AfterHook, FieldBinding, State, Table, TransitionDef, TransitionId};
use std::sync::Arc;

/// Accumulates states and transitions during declaration, validates
/// referential integrity, and finalizes into an immutable [`Table`].
///
/// Referential checks run at registration time: a transition may only name
/// states that were already declared, and a `(transition, from)` pair may
/// only be declared once. [`finalize`](Self::finalize) consumes the builder,
/// so runtime code can never observe a half-built table.
///
/// # Example
///
/// ```rust
/// use statefield::builder::TableBuilder;
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
/// assert_eq!(table.all_states().len(), 2);
/// # Ok::<(), statefield::ConfigError>(())
/// ```
pub struct TableBuilder<H, S: State, T: TransitionId> {
    field: &'static str,
    binding: FieldBinding<H, S>,
    default_state: Option<S>,
    all_states: Vec<S>,
    transitions: Vec<TransitionDef<H, S, T>>,
    after_transition: Option<AfterHook<H>>,
}

impl<H, S: State, T: TransitionId> TableBuilder<H, S, T> {
    /// Start a declaration for the host field named `field`, read and
    /// written through the given accessors.
    pub fn new(field: &'static str, get: fn(&H) -> Option<S>, set: fn(&mut H, S)) -> Self {
        Self {
            field,
            binding: FieldBinding::new(get, set),
            default_state: None,
            all_states: Vec::new(),
            transitions: Vec::new(),
            after_transition: None,
        }
    }

    /// Declare the initial state: the default value of the bound field, and
    /// a member of the state set.
    pub fn initial_state(mut self, state: S) -> Self {
        if !self.all_states.contains(&state) {
            self.all_states.push(state.clone());
        }
        self.default_state = Some(state);
        self
    }

    /// Declare further states. Duplicates are no-ops; insertion order is
    /// preserved for diagnostics.
    pub fn other_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            if !self.all_states.contains(&state) {
                self.all_states.push(state);
            }
        }
        self
    }

    /// Declare an unguarded, action-less transition.
    pub fn allow_transition(self, transition: T, from: S, to: S) -> Result<Self, ConfigError> {
        self.allow(TransitionDecl::new(transition, from, to))
    }

    /// Declare a transition, with whatever guard and action the declaration
    /// carries. Fails if either state is undeclared or if the same
    /// `(transition, from)` pair was already registered.
    pub fn allow(mut self, decl: TransitionDecl<H, S, T>) -> Result<Self, ConfigError> {
        let def = decl.into_def();

        if !self.all_states.contains(&def.from) {
            return Err(ConfigError::UnknownSourceState {
                state: def.from.name().to_string(),
            });
        }
        if !self.all_states.contains(&def.to) {
            return Err(ConfigError::UnknownTargetState {
                state: def.to.name().to_string(),
            });
        }
        if self
            .transitions
            .iter()
            .any(|existing| existing.matches(&def.transition, &def.from))
        {
            return Err(ConfigError::DuplicateTransition {
                transition: def.transition.name().to_string(),
                from: def.from.name().to_string(),
            });
        }

        self.transitions.push(def);
        Ok(self)
    }

    /// Register the after-transition hook. A table has at most one;
    /// re-registering replaces it.
    pub fn after_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.after_transition = Some(Arc::new(hook));
        self
    }

    /// Validate and produce the immutable [`Table`].
    pub fn finalize(self) -> Result<Table<H, S, T>, ConfigError> {
        let default_state = self.default_state.ok_or(ConfigError::MissingInitialState)?;

        tracing::debug!(
            field = self.field,
            states = self.all_states.len(),
            transitions = self.transitions.len(),
            "state table finalized"
        );

        Ok(Table::new(
            self.field,
            self.binding,
            self.all_states,
            self.transitions,
            default_state,
            self.after_transition,
        ))
    }
}
