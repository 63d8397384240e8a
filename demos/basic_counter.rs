//! Basic Counter
//!
//! This example demonstrates the counter commands against an in-memory store.
//!
//! Key concepts:
//! - Bounded increment/decrement with a configurable symmetric limit
//! - Rejected mutations leave state and history untouched
//! - Capped, newest-first action history
//!
//! Run with: cargo run --example basic_counter

use tally::controller::CounterController;
use tally::store::MemoryStore;

fn main() {
    println!("=== Basic Counter Example ===\n");

    let mut counter = CounterController::load(MemoryStore::new(), false);
    println!("Loaded counter: value {}, limit {}", counter.value(), counter.limit());

    // Step by one and by five, the two step sizes the UI exposes
    counter.increment(1).unwrap();
    counter.increment(5).unwrap();
    counter.decrement(1).unwrap();
    println!("After +1, +5, -1: value {}", counter.value());

    // Push against the upper bound
    counter.increment(5).unwrap();
    match counter.increment(5) {
        Ok(value) => println!("Unexpected success: {value}"),
        Err(err) => println!("Rejected: {err}"),
    }
    println!("Value after rejection: {}", counter.value());

    counter.reset();
    println!("After reset: value {}", counter.value());

    // Tighten the limit; the current value is never re-clamped
    counter.set_limit("3");
    println!("\nLimit is now {}", counter.limit());
    match counter.increment(5) {
        Ok(value) => println!("Unexpected success: {value}"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\nHistory (newest first):");
    for entry in counter.history().entries() {
        println!("  [{:?}] {}", entry.kind, entry.description);
    }

    println!("\n=== Example Complete ===");
}
