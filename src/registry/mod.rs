//! Registry binding tables to `(host type, field name)` pairs.
//!
//! The registry is an explicit object, typically created once during
//! application startup and shared read-only afterwards. It owns one
//! finalized [`Table`] per `(host type, field)` key and hands out typed
//! [`Machine`] handles for host instances.

use crate::builder::{ConfigError, TableBuilder};
use crate::core::{State, Table, TransitionId};
use crate::machine::Machine;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps `(host type, field name)` to its finalized transition table.
///
/// Tables are type-erased in storage and recovered through the same type
/// parameters they were bound with; asking for a key under different types
/// simply finds nothing.
///
/// Binding a key that already exists replaces the table wholesale - the
/// previous declaration for that `(type, field)` pair is discarded.
///
/// # Example
///
/// ```rust
/// use statefield::{state_enum, transition_enum, Registry};
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
/// let mut registry = Registry::new();
/// registry.bind_field(
///     "dispatch_state",
///     |job: &Job| job.dispatch_state.clone(),
///     |job: &mut Job, s| job.dispatch_state = Some(s),
///     |table| {
///         table
///             .initial_state(DispatchState::Waiting)
///             .other_states([DispatchState::Assigned])
///             .allow_transition(DispatchOp::Assign, DispatchState::Waiting, DispatchState::Assigned)
///     },
/// )?;
///
/// let mut job = Job { dispatch_state: None };
/// let mut machine = registry
///     .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
///     .expect("field is bound");
/// machine.fire(&DispatchOp::Assign)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Registry {
    tables: HashMap<(TypeId, &'static str), Box<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Declare and finalize a table for `field` on host type `H`.
    ///
    /// The `declare` closure receives a fresh [`TableBuilder`] and runs the
    /// declaration; any [`ConfigError`] it raises (or that `finalize`
    /// raises) propagates unchanged and leaves previous bindings intact.
    pub fn bind_field<H, S, T, F>(
        &mut self,
        field: &'static str,
        get: fn(&H) -> Option<S>,
        set: fn(&mut H, S),
        declare: F,
    ) -> Result<Arc<Table<H, S, T>>, ConfigError>
    where
        H: 'static,
        S: State + 'static,
        T: TransitionId + 'static,
        F: FnOnce(TableBuilder<H, S, T>) -> Result<TableBuilder<H, S, T>, ConfigError>,
    {
        let builder = TableBuilder::new(field, get, set);
        let table = Arc::new(declare(builder)?.finalize()?);

        self.tables
            .insert((TypeId::of::<H>(), field), Box::new(Arc::clone(&table)));
        tracing::debug!(
            host = std::any::type_name::<H>(),
            field,
            "state field bound"
        );
        Ok(table)
    }

    /// The table bound to `field` on host type `H`, if any.
    pub fn table<H, S, T>(&self, field: &'static str) -> Option<Arc<Table<H, S, T>>>
    where
        H: 'static,
        S: State + 'static,
        T: TransitionId + 'static,
    {
        self.tables
            .get(&(TypeId::of::<H>(), field))
            .and_then(|entry| entry.downcast_ref::<Arc<Table<H, S, T>>>())
            .map(Arc::clone)
    }

    /// A machine handle binding `host` to the table for `field`, if bound.
    pub fn machine<'m, H, S, T>(
        &'m self,
        field: &'static str,
        host: &'m mut H,
    ) -> Option<Machine<'m, H, S, T>>
    where
        H: 'static,
        S: State + 'static,
        T: TransitionId + 'static,
    {
        let entry = self.tables.get(&(TypeId::of::<H>(), field))?;
        let table = entry.downcast_ref::<Arc<Table<H, S, T>>>()?;
        Some(Machine::new(table.as_ref(), host))
    }

    /// The field accessor of the binding: the stored value, or the table's
    /// default state if the field was never written. `None` if `field` is
    /// not bound for `H`.
    pub fn current_state<H, S, T>(&self, field: &'static str, host: &H) -> Option<S>
    where
        H: 'static,
        S: State + 'static,
        T: TransitionId + 'static,
    {
        self.table::<H, S, T>(field)
            .map(|table| table.current_state(host))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::TransitionError;
    use crate::{state_enum, transition_enum};

    state_enum! {
        enum DispatchState {
            Waiting,
            Assigned,
            Accepted,
        }
    }

    transition_enum! {
        enum DispatchOp {
            Assign,
            Accept,
        }
    }

    state_enum! {
        enum ReviewState {
            Created,
            Reviewed,
        }
    }

    transition_enum! {
        enum ReviewOp {
            Review,
        }
    }

    struct Job {
        dispatch_state: Option<DispatchState>,
        review_state: Option<ReviewState>,
    }

    impl Job {
        fn new() -> Self {
            Self {
                dispatch_state: None,
                review_state: None,
            }
        }
    }

    struct Driver {
        dispatch_state: Option<DispatchState>,
    }

    fn bind_dispatch(registry: &mut Registry) {
        registry
            .bind_field(
                "dispatch_state",
                |job: &Job| job.dispatch_state.clone(),
                |job: &mut Job, s| job.dispatch_state = Some(s),
                |table| {
                    table
                        .initial_state(DispatchState::Waiting)
                        .other_states([DispatchState::Assigned, DispatchState::Accepted])
                        .allow_transition(
                            DispatchOp::Assign,
                            DispatchState::Waiting,
                            DispatchState::Assigned,
                        )?
                        .allow_transition(
                            DispatchOp::Accept,
                            DispatchState::Assigned,
                            DispatchState::Accepted,
                        )
                },
            )
            .unwrap();
    }

    #[test]
    fn bound_field_drives_instances() {
        let mut registry = Registry::new();
        bind_dispatch(&mut registry);

        let mut job = Job::new();
        let mut machine = registry
            .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
            .unwrap();

        assert_eq!(machine.state(), DispatchState::Waiting);
        machine.fire(&DispatchOp::Assign).unwrap();
        assert_eq!(job.dispatch_state, Some(DispatchState::Assigned));
    }

    #[test]
    fn unbound_field_yields_nothing() {
        let registry = Registry::new();
        let mut job = Job::new();

        assert!(registry
            .table::<Job, DispatchState, DispatchOp>("dispatch_state")
            .is_none());
        assert!(registry
            .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
            .is_none());
    }

    #[test]
    fn two_fields_on_one_host_are_independent() {
        let mut registry = Registry::new();
        bind_dispatch(&mut registry);
        registry
            .bind_field(
                "review_state",
                |job: &Job| job.review_state.clone(),
                |job: &mut Job, s| job.review_state = Some(s),
                |table| {
                    table
                        .initial_state(ReviewState::Created)
                        .other_states([ReviewState::Reviewed])
                        .allow_transition(
                            ReviewOp::Review,
                            ReviewState::Created,
                            ReviewState::Reviewed,
                        )
                },
            )
            .unwrap();

        let mut job = Job::new();
        registry
            .machine::<Job, ReviewState, ReviewOp>("review_state", &mut job)
            .unwrap()
            .fire(&ReviewOp::Review)
            .unwrap();

        assert_eq!(job.review_state, Some(ReviewState::Reviewed));
        assert_eq!(job.dispatch_state, None);
        assert_eq!(
            registry.current_state::<Job, DispatchState, DispatchOp>("dispatch_state", &job),
            Some(DispatchState::Waiting)
        );
    }

    #[test]
    fn same_field_name_on_two_hosts_is_two_bindings() {
        let mut registry = Registry::new();
        bind_dispatch(&mut registry);
        registry
            .bind_field(
                "dispatch_state",
                |driver: &Driver| driver.dispatch_state.clone(),
                |driver: &mut Driver, s| driver.dispatch_state = Some(s),
                |table| {
                    table
                        .initial_state(DispatchState::Waiting)
                        .other_states([DispatchState::Assigned])
                        .allow_transition(
                            DispatchOp::Assign,
                            DispatchState::Waiting,
                            DispatchState::Assigned,
                        )
                },
            )
            .unwrap();

        let mut driver = Driver {
            dispatch_state: None,
        };
        registry
            .machine::<Driver, DispatchState, DispatchOp>("dispatch_state", &mut driver)
            .unwrap()
            .fire(&DispatchOp::Assign)
            .unwrap();

        // The Job binding still has both transitions; the Driver one has one.
        let job_table = registry
            .table::<Job, DispatchState, DispatchOp>("dispatch_state")
            .unwrap();
        let driver_table = registry
            .table::<Driver, DispatchState, DispatchOp>("dispatch_state")
            .unwrap();
        assert!(job_table.is_declared_anywhere(&DispatchOp::Accept));
        assert!(!driver_table.is_declared_anywhere(&DispatchOp::Accept));
    }

    #[test]
    fn rebinding_replaces_the_table_wholesale() {
        let mut registry = Registry::new();
        bind_dispatch(&mut registry);

        registry
            .bind_field(
                "dispatch_state",
                |job: &Job| job.dispatch_state.clone(),
                |job: &mut Job, s| job.dispatch_state = Some(s),
                |table| {
                    table
                        .initial_state(DispatchState::Waiting)
                        .other_states([DispatchState::Assigned])
                        .allow_transition(
                            DispatchOp::Assign,
                            DispatchState::Waiting,
                            DispatchState::Assigned,
                        )
                },
            )
            .unwrap();

        let mut job = Job::new();
        job.dispatch_state = Some(DispatchState::Assigned);
        let mut machine = registry
            .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
            .unwrap();

        // Accept was only declared in the first binding.
        assert!(matches!(
            machine.fire(&DispatchOp::Accept),
            Err(TransitionError::UnknownTransition { .. })
        ));
    }

    #[test]
    fn failed_declaration_leaves_registry_unchanged() {
        let mut registry = Registry::new();

        let result = registry.bind_field::<Job, DispatchState, DispatchOp, _>(
            "dispatch_state",
            |job: &Job| job.dispatch_state.clone(),
            |job: &mut Job, s| job.dispatch_state = Some(s),
            |table| {
                table.allow_transition(
                    DispatchOp::Assign,
                    DispatchState::Waiting,
                    DispatchState::Assigned,
                )
            },
        );

        assert!(matches!(
            result,
            Err(ConfigError::UnknownSourceState { .. })
        ));
        assert!(registry
            .table::<Job, DispatchState, DispatchOp>("dispatch_state")
            .is_none());
    }
}
