//! Interactive Counter
//!
//! This example is a thin stdin adapter over the controller, wiring the
//! widget's keyboard shortcuts to the command functions.
//!
//! Key concepts:
//! - The controller never renders; the adapter reads commands and prints state
//! - `+`/`=` increment, `-` decrement, `r` reset, as in the widget
//! - Limit errors surface as messages, never as crashes
//!
//! Run with: cargo run --example interactive

use std::io::{self, BufRead, Write};

use tally::controller::CounterController;
use tally::core::Theme;
use tally::store::MemoryStore;

fn print_state(counter: &CounterController<MemoryStore>) {
    println!(
        "value {} (limit {}), theme {}, history {} entries",
        counter.value(),
        counter.limit(),
        counter.theme(),
        counter.history().len()
    );
}

fn main() {
    println!("=== Interactive Counter ===\n");
    println!("Commands:");
    println!("  + or =     increment by 1");
    println!("  -          decrement by 1");
    println!("  +5 / -5    step by 5");
    println!("  r          reset");
    println!("  limit N    set the limit");
    println!("  t          toggle theme");
    println!("  h          show history");
    println!("  q          quit\n");

    let mut counter = CounterController::load(MemoryStore::new(), false);
    print_state(&counter);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let input = line.trim();
        let result = match input {
            "+" | "=" => counter.increment(1).map(Some),
            "-" => counter.decrement(1).map(Some),
            "+5" => counter.increment(5).map(Some),
            "-5" => counter.decrement(5).map(Some),
            "r" | "R" => Ok(Some(counter.reset())),
            "t" => {
                let next = match counter.theme() {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
                counter.set_theme(next);
                Ok(None)
            }
            "h" => {
                for entry in counter.history().entries() {
                    println!("  {}", entry.description);
                }
                Ok(None)
            }
            "q" => break,
            _ if input.starts_with("limit ") => {
                let limit = counter.set_limit(input.trim_start_matches("limit "));
                println!("Limit set to {limit}");
                Ok(None)
            }
            "" => Ok(None),
            _ => {
                println!("Unknown command: {input}");
                Ok(None)
            }
        };

        match result {
            Ok(Some(_)) => print_state(&counter),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
