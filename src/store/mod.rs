//! Persisted preference storage.
//!
//! The widget persists everything through a flat string key-value
//! surface: the counter value, the action history, and the two display
//! preferences each live under their own key (see [`keys`]). Backends
//! implement [`PreferenceStore`]; [`MemoryStore`] backs tests and
//! ephemeral sessions, [`FileStore`] persists across runs.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Recognized preference keys.
///
/// Key names match the stored format the widget has always used, so
/// data written by earlier versions keeps loading.
pub mod keys {
    /// Current counter value, as a decimal integer string.
    pub const COUNTER_VALUE: &str = "myCounterValue";
    /// Action history, as a JSON list of entries.
    pub const HISTORY: &str = "counterHistory";
    /// UI theme, `light` or `dark`.
    pub const THEME: &str = "theme";
    /// Whether the history panel is collapsed, `true` or `false`.
    pub const PANEL_COLLAPSED: &str = "historyCollapsed";
}

/// String key-value store for widget preferences.
///
/// Writes are fire-and-forget from the widget's point of view: the
/// controller discards write errors rather than retrying or surfacing
/// them. Implementations still report failures for callers that care.
///
/// # Example
///
/// ```rust
/// use tally::store::{keys, MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// store.set(keys::COUNTER_VALUE, "3").unwrap();
///
/// assert_eq!(store.get(keys::COUNTER_VALUE), Some("3".to_string()));
/// assert_eq!(store.get(keys::HISTORY), None);
/// ```
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
