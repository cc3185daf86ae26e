//! Dispatch Workflow
//!
//! This example binds a guarded dispatch-state field to a `Job` type through
//! the registry and walks one instance through its lifecycle.
//!
//! Key concepts:
//! - Declaring states and transitions once per (type, field) pair
//! - Guards that read live host data
//! - The host field as the single source of truth
//!
//! Run with: cargo run --example dispatch

use statefield::{state_enum, transition_enum, Registry};

state_enum! {
    enum DispatchState {
        Waiting,
        Assigned,
        Accepted,
        Cancelled,
    }
}

transition_enum! {
    enum DispatchOp {
        Assign,
        Accept,
        Cancel,
    }
}

struct Job {
    dispatch_state: Option<DispatchState>,
    driver_nearby: bool,
}

fn main() {
    println!("=== Dispatch Workflow Example ===\n");

    let mut registry = Registry::new();
    registry
        .bind_field(
            "dispatch_state",
            |job: &Job| job.dispatch_state.clone(),
            |job: &mut Job, s| job.dispatch_state = Some(s),
            |table| {
                table
                    .initial_state(DispatchState::Waiting)
                    .other_states([
                        DispatchState::Assigned,
                        DispatchState::Accepted,
                        DispatchState::Cancelled,
                    ])
                    .allow(
                        statefield::TransitionDecl::new(
                            DispatchOp::Assign,
                            DispatchState::Waiting,
                            DispatchState::Assigned,
                        )
                        .when(|job: &Job| job.driver_nearby),
                    )?
                    .allow_transition(
                        DispatchOp::Accept,
                        DispatchState::Assigned,
                        DispatchState::Accepted,
                    )?
                    .allow_transition(
                        DispatchOp::Cancel,
                        DispatchState::Waiting,
                        DispatchState::Cancelled,
                    )
            },
        )
        .unwrap();

    let mut job = Job {
        dispatch_state: None,
        driver_nearby: false,
    };

    {
        let machine = registry
            .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
            .unwrap();
        println!("Initial state: {:?}", machine.state());
        println!("No driver nearby, allowed: {:?}", machine.allowed_transitions());
    }

    job.driver_nearby = true;
    let mut machine = registry
        .machine::<Job, DispatchState, DispatchOp>("dispatch_state", &mut job)
        .unwrap();
    println!("Driver arrived, allowed: {:?}", machine.allowed_transitions());

    let outcome = machine.fire(&DispatchOp::Assign).unwrap();
    println!("Fired Assign -> {:?}", outcome);

    let outcome = machine.fire(&DispatchOp::Accept).unwrap();
    println!("Fired Accept -> {:?}", outcome);

    println!("Final field value: {:?}", job.dispatch_state);
    println!("\n=== Example Complete ===");
}
