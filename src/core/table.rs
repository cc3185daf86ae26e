//! The finalized transition table for one `(host type, field)` pair.
//!
//! A `Table` is produced by [`TableBuilder::finalize`] and is read-only from
//! then on. The host's field is the single source of truth for the current
//! state; the table holds only the declaration: states, transitions, the
//! default state, and the optional after-transition hook.
//!
//! [`TableBuilder::finalize`]: crate::builder::TableBuilder::finalize

use super::state::State;
use super::transition::{TransitionDef, TransitionId};
use std::sync::Arc;

/// Accessors binding a table to one field of its host type.
///
/// The bound field has type `Option<S>`; a `None` value reads as the
/// table's default state, so a freshly constructed host starts in the
/// default state without any initialization call.
pub struct FieldBinding<H, S> {
    get: fn(&H) -> Option<S>,
    set: fn(&mut H, S),
}

impl<H, S> FieldBinding<H, S> {
    pub fn new(get: fn(&H) -> Option<S>, set: fn(&mut H, S)) -> Self {
        Self { get, set }
    }

    /// Read the raw field value. `None` means the field was never written.
    pub fn read(&self, host: &H) -> Option<S> {
        (self.get)(host)
    }

    /// Write a new state into the field.
    pub fn write(&self, host: &mut H, state: S) {
        (self.set)(host, state)
    }
}

impl<H, S> Clone for FieldBinding<H, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, S> Copy for FieldBinding<H, S> {}

/// Hook run once after every successful transition in a table. It observes
/// the already-updated field.
pub type AfterHook<H> = Arc<dyn Fn(&mut H) + Send + Sync>;

/// The finalized, immutable set of states, transitions, default state and
/// after-hook for one `(host type, field)` pair.
///
/// Tables are created through [`TableBuilder`]; `finalize` consumes the
/// builder, so every `Table` in existence has passed validation. A finalized
/// table never changes and is safe to share across threads behind an `Arc`.
///
/// [`TableBuilder`]: crate::builder::TableBuilder
pub struct Table<H, S: State, T: TransitionId> {
    field: &'static str,
    binding: FieldBinding<H, S>,
    all_states: Vec<S>,
    transitions: Vec<TransitionDef<H, S, T>>,
    default_state: S,
    after_transition: Option<AfterHook<H>>,
}

impl<H, S: State, T: TransitionId> Table<H, S, T> {
    pub(crate) fn new(
        field: &'static str,
        binding: FieldBinding<H, S>,
        all_states: Vec<S>,
        transitions: Vec<TransitionDef<H, S, T>>,
        default_state: S,
        after_transition: Option<AfterHook<H>>,
    ) -> Self {
        Self {
            field,
            binding,
            all_states,
            transitions,
            default_state,
            after_transition,
        }
    }

    /// Name of the bound host field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// All declared states, in declaration order.
    pub fn all_states(&self) -> &[S] {
        &self.all_states
    }

    /// The state a host instance occupies before its field is first written.
    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// The host's current state: the stored field value, or the default
    /// state if the field was never written.
    pub fn current_state(&self, host: &H) -> S {
        self.binding
            .read(host)
            .unwrap_or_else(|| self.default_state.clone())
    }

    /// All rows declared from `state`, in declaration order. Empty for a
    /// terminal state - that is not an error.
    pub fn transitions_from<'a>(
        &'a self,
        state: &'a S,
    ) -> impl Iterator<Item = &'a TransitionDef<H, S, T>> {
        self.transitions.iter().filter(move |def| def.from == *state)
    }

    /// Is `transition` declared from `from`? Ignores guards.
    pub fn is_declared(&self, transition: &T, from: &S) -> bool {
        self.transitions
            .iter()
            .any(|def| def.matches(transition, from))
    }

    /// Is `transition` declared anywhere in this table, from any state?
    pub fn is_declared_anywhere(&self, transition: &T) -> bool {
        self.transitions
            .iter()
            .any(|def| def.transition == *transition)
    }

    /// The guard-filtered set of transitions available to this host right
    /// now, in declaration order.
    ///
    /// Side-effect-free and safe to call repeatedly: the result reflects the
    /// live field value at each call.
    pub fn allowed_transitions(&self, host: &H) -> Vec<T> {
        let current = self.current_state(host);
        self.transitions
            .iter()
            .filter(|def| def.eligible(host, &current))
            .map(|def| def.transition.clone())
            .collect()
    }

    pub(crate) fn binding(&self) -> FieldBinding<H, S> {
        self.binding
    }

    pub(crate) fn find(&self, transition: &T, current: &S) -> Option<&TransitionDef<H, S, T>> {
        self.transitions
            .iter()
            .find(|def| def.matches(transition, current))
    }

    pub(crate) fn after_hook(&self) -> Option<&AfterHook<H>> {
        self.after_transition.as_ref()
    }
}
