//! Session flow example for change identities.
//!
//! This example walks two clients through an offline edit, actor assignment,
//! concurrent edits and a remote merge, printing each identity on the way.
//!
//! Run with: cargo run --example session_flow

use change_id::{ActorId, ChangeClock, ChangeId, ChangeIdRecord, ValidationError};

fn main() -> Result<(), ValidationError> {
    println!("=== Change ID Session Example ===\n");

    // Alice starts editing before the server has assigned her an actor
    let alice = ChangeClock::default();
    println!("Alice starts at {}", alice.current());

    alice.next();
    alice.next();
    println!("After two offline edits: {}", alice.current());

    // The server assigns Alice's actor; her counters are kept
    let rebound = alice.set_actor(ActorId::new("65a1f0c2b3d4e5f6a7b8c9a1")?);
    println!("Actor assigned:          {rebound}\n");

    // Bob was hydrated from the server with an acknowledged change
    let bob = ChangeClock::new(ChangeId::of(4, 9, "65a1f0c2b3d4e5f6a7b8c9b2", Some(17))?);
    let hydrated = bob.current();
    println!(
        "Bob hydrated at {hydrated} (server seq {})",
        hydrated.server_seq_as_string()
    );

    // Both edit concurrently
    let a = alice.next();
    let b = bob.next();
    println!("\n--- Concurrent edits ---");
    println!("  Alice: {a}");
    println!("  Bob:   {b}");

    // Elements created within each change get their own tickets
    let a_tickets: Vec<_> = (0..2).map(|d| a.create_time_ticket(d)).collect();
    let b_ticket = b.create_time_ticket(0);
    for ticket in &a_tickets {
        println!("  Alice ticket {}", ticket.to_test_string());
    }
    println!("  Bob ticket   {}", b_ticket.to_test_string());

    // Each side receives the other's change
    let alice_synced = alice.sync_lamport(b.lamport());
    let bob_synced = bob.sync_lamport(a.lamport());
    println!("\n--- After exchanging changes ---");
    println!("  Alice: {alice_synced}");
    println!("  Bob:   {bob_synced}");

    // What goes over the wire
    let record = ChangeIdRecord::from(&alice.next());
    println!("\nAlice's next change on the wire: {record:?}");

    Ok(())
}
