//! Document Workflow
//!
//! This example uses an action closure to gate a transition on work that
//! runs at fire time, and an after-transition hook for auditing.
//!
//! Key concepts:
//! - Actions that can abort a transition by returning false
//! - The after-hook observing the already-updated field
//! - Driving a table directly, without a registry
//!
//! Run with: cargo run --example document_workflow

use statefield::{state_enum, transition_enum, FireOutcome, Machine, TableBuilder, TransitionDecl};

state_enum! {
    enum DocState {
        Draft,
        Submitted,
        Published,
    }
}

transition_enum! {
    enum DocOp {
        Submit,
        Publish,
    }
}

struct Document {
    state: Option<DocState>,
    body: String,
    revisions: u32,
}

fn main() {
    println!("=== Document Workflow Example ===\n");

    let table = TableBuilder::new(
        "state",
        |doc: &Document| doc.state.clone(),
        |doc: &mut Document, s| doc.state = Some(s),
    )
    .initial_state(DocState::Draft)
    .other_states([DocState::Submitted, DocState::Published])
    .allow(
        TransitionDecl::new(DocOp::Submit, DocState::Draft, DocState::Submitted)
            // An empty document refuses to submit.
            .action(|doc: &mut Document| !doc.body.is_empty()),
    )
    .unwrap()
    .allow_transition(DocOp::Publish, DocState::Submitted, DocState::Published)
    .unwrap()
    .after_transition(|doc: &mut Document| {
        doc.revisions += 1;
        println!("  audit: now {:?}, revision {}", doc.state, doc.revisions);
    })
    .finalize()
    .unwrap();

    let mut doc = Document {
        state: None,
        body: String::new(),
        revisions: 0,
    };

    let mut machine = Machine::new(&table, &mut doc);
    println!("Submitting an empty document:");
    match machine.fire(&DocOp::Submit).unwrap() {
        FireOutcome::Aborted => println!("  aborted by action, still {:?}", machine.state()),
        FireOutcome::Transitioned(s) => println!("  unexpected transition to {s:?}"),
    }

    doc.body = "Release notes".to_string();
    let mut machine = Machine::new(&table, &mut doc);
    println!("Submitting with content:");
    machine.fire(&DocOp::Submit).unwrap();
    println!("Publishing:");
    machine.fire(&DocOp::Publish).unwrap();

    println!("\nFinal state: {:?}, revisions: {}", doc.state, doc.revisions);
    println!("\n=== Example Complete ===");
}
