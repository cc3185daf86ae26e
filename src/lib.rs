//! Statefield: declarative guarded state fields for arbitrary host types.
//!
//! A host type acquires a named finite-state field whose legal transitions,
//! guard conditions and lifecycle callbacks are declared once and enforced
//! on every instance. The declaration finalizes into an immutable
//! transition table; at runtime the host's own field is the single source
//! of truth for current state.
//!
//! # Core Concepts
//!
//! - **State** / **TransitionId**: small comparable identifiers, usually
//!   enums generated with [`state_enum!`] and [`transition_enum!`]
//! - **Table**: the finalized set of states, transitions, default state and
//!   after-hook for one `(host type, field)` pair
//! - **Guard**: host predicate conditionally permitting a transition
//! - **Machine**: per-instance handle that queries and fires transitions
//! - **Registry**: maps `(host type, field name)` to its table
//!
//! # Example
//!
//! ```rust
//! use statefield::{state_enum, transition_enum, Machine, TableBuilder};
//!
//! state_enum! {
//!     pub enum DispatchState {
//!         Waiting,
//!         Assigned,
//!         Accepted,
//!     }
//! }
//!
//! transition_enum! {
//!     pub enum DispatchOp {
//!         Assign,
//!         Accept,
//!     }
//! }
//!
//! struct Job {
//!     dispatch_state: Option<DispatchState>,
//! }
//!
//! let table = TableBuilder::new(
//!     "dispatch_state",
//!     |job: &Job| job.dispatch_state.clone(),
//!     |job: &mut Job, s| job.dispatch_state = Some(s),
//! )
//! .initial_state(DispatchState::Waiting)
//! .other_states([DispatchState::Assigned, DispatchState::Accepted])
//! .allow_transition(DispatchOp::Assign, DispatchState::Waiting, DispatchState::Assigned)?
//! .allow_transition(DispatchOp::Accept, DispatchState::Assigned, DispatchState::Accepted)?
//! .finalize()?;
//!
//! let mut job = Job { dispatch_state: None };
//! let mut machine = Machine::new(&table, &mut job);
//!
//! assert_eq!(machine.state(), DispatchState::Waiting);
//! assert_eq!(machine.allowed_transitions(), vec![DispatchOp::Assign]);
//!
//! machine.fire(&DispatchOp::Assign)?;
//! assert_eq!(job.dispatch_state, Some(DispatchState::Assigned));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod registry;

// Re-export commonly used types
pub use builder::{ConfigError, TableBuilder, TransitionDecl};
pub use core::{Guard, State, Table, TransitionId};
pub use machine::{FireOutcome, Machine, TransitionError};
pub use registry::Registry;
