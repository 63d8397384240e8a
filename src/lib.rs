//! Tally: a bounded counter state manager
//!
//! Tally keeps a "pure core, imperative shell" split: the counter value,
//! action history, and theme rules are pure values with pure operations,
//! while persistence is isolated behind an injected key-value store.
//!
//! # Core Concepts
//!
//! - **Counter**: an integer confined to a symmetric, configurable bound
//! - **History**: an immutable, newest-first log capped at ten entries
//! - **Preferences**: theme and panel state persisted independently
//! - **Controller**: the shell that ties core values to a [`store::PreferenceStore`]
//!
//! # Example
//!
//! ```rust
//! use tally::controller::CounterController;
//! use tally::core::Theme;
//! use tally::store::MemoryStore;
//!
//! let mut counter = CounterController::load(MemoryStore::new(), false);
//!
//! counter.increment(1).unwrap();
//! counter.increment(5).unwrap();
//! counter.decrement(1).unwrap();
//! assert_eq!(counter.value(), 5);
//!
//! // Every successful mutation is recorded, newest first.
//! assert_eq!(counter.history().len(), 3);
//!
//! counter.set_theme(Theme::Dark);
//! assert_eq!(counter.theme(), Theme::Dark);
//! ```

pub mod controller;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use crate::controller::CounterController;
pub use crate::core::{ActionHistory, CounterError, CounterState, HistoryEntry, Theme};
pub use crate::store::{FileStore, MemoryStore, PreferenceStore};
