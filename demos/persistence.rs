//! Persistence and Resume
//!
//! This example demonstrates counter state surviving across sessions
//! through the file-backed preference store.
//!
//! Key concepts:
//! - All four preference keys persisted as a single JSON file
//! - Atomic writes to prevent corruption
//! - Absent or malformed data silently falls back to defaults
//!
//! Run with: cargo run --example persistence

use std::fs;

use tally::controller::CounterController;
use tally::core::Theme;
use tally::store::FileStore;

const PREFS_PATH: &str = "/tmp/tally-demo-prefs.json";

fn main() {
    println!("=== Persistence Example ===\n");

    fs::remove_file(PREFS_PATH).ok();

    // Session 1: mutate and let the controller persist as it goes
    println!("Session 1: fresh store");
    println!("----------------------------------------");
    {
        let store = FileStore::open(PREFS_PATH).expect("open preference file");
        let mut counter = CounterController::load(store, false);

        counter.increment(5).unwrap();
        counter.increment(1).unwrap();
        counter.set_theme(Theme::Dark);
        counter.toggle_panel();

        println!("Value: {}", counter.value());
        println!("Theme: {}", counter.theme());
        println!("Panel collapsed: {}", counter.panel_collapsed());
    }

    println!("\nStored file contents:");
    println!("{}", fs::read_to_string(PREFS_PATH).unwrap());

    // Session 2: a new controller picks up where the first left off
    println!("Session 2: reopening the same file");
    println!("----------------------------------------");
    {
        let store = FileStore::open(PREFS_PATH).expect("open preference file");
        let counter = CounterController::load(store, false);

        println!("Value: {}", counter.value());
        println!("Theme: {}", counter.theme());
        println!("Panel collapsed: {}", counter.panel_collapsed());
        println!("History entries: {}", counter.history().len());
    }

    // Session 3: corrupt contents are treated as absent
    println!("\nSession 3: corrupt file falls back to defaults");
    println!("----------------------------------------");
    fs::write(PREFS_PATH, "{this is not json").unwrap();
    {
        let store = FileStore::open(PREFS_PATH).expect("open preference file");
        let counter = CounterController::load(store, false);

        println!("Value: {}", counter.value());
        println!("History entries: {}", counter.history().len());
    }

    fs::remove_file(PREFS_PATH).ok();

    println!("\n=== Example Complete ===");
}
