//! Imperative shell around the pure counter core.
//!
//! [`CounterController`] owns the counter state, the action history,
//! and the display preferences, and persists them through an injected
//! [`PreferenceStore`] after every successful mutation. UI adapters
//! (buttons, keyboard handlers) invoke the command methods and render
//! from the accessors; the controller itself never renders.
//!
//! All commands are synchronous and run to completion; persistence
//! writes are fire-and-forget.

use chrono::Utc;

use crate::core::{
    parse_limit, ActionHistory, ActionKind, CounterError, CounterState, HistoryEntry, Theme,
};
use crate::store::{keys, PreferenceStore};

/// Counter state manager: the pure core values plus injected persistence.
///
/// # Example
///
/// ```rust
/// use tally::controller::CounterController;
/// use tally::store::MemoryStore;
///
/// let mut counter = CounterController::load(MemoryStore::new(), false);
///
/// counter.increment(1).unwrap();
/// counter.increment(5).unwrap();
/// assert_eq!(counter.value(), 6);
/// assert_eq!(counter.history().len(), 2);
/// ```
pub struct CounterController<P: PreferenceStore> {
    state: CounterState,
    history: ActionHistory,
    theme: Theme,
    panel_collapsed: bool,
    store: P,
}

impl<P: PreferenceStore> CounterController<P> {
    /// Load persisted state from `store`, falling back to defaults for
    /// absent or malformed entries (value 0, empty history, panel
    /// expanded).
    ///
    /// `prefers_dark` is the OS-level dark-mode signal supplied by the
    /// adapter; it only matters when no theme preference was saved.
    /// The resolved theme is written back, so the next load finds an
    /// explicit preference.
    pub fn load(mut store: P, prefers_dark: bool) -> Self {
        let value = store
            .get(keys::COUNTER_VALUE)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let history = store
            .get(keys::HISTORY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        let saved = store
            .get(keys::THEME)
            .and_then(|raw| Theme::from_name(&raw));
        let theme = Theme::resolve(saved, prefers_dark);
        store.set(keys::THEME, theme.as_str()).ok();
        let panel_collapsed = store
            .get(keys::PANEL_COLLAPSED)
            .is_some_and(|raw| raw == "true");

        Self {
            state: CounterState::restore(value, crate::core::DEFAULT_LIMIT),
            history,
            theme,
            panel_collapsed,
            store,
        }
    }

    /// Current counter value.
    pub fn value(&self) -> i64 {
        self.state.value()
    }

    /// Limit currently in force.
    pub fn limit(&self) -> i64 {
        self.state.limit()
    }

    /// Recorded mutations, newest first.
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the history panel is collapsed.
    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    /// The underlying store.
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Consume the controller, returning the underlying store.
    pub fn into_store(self) -> P {
        self.store
    }

    /// Increase the value by `step` and return the new value.
    ///
    /// On success the mutation is recorded in the history and
    /// persisted. On [`CounterError::LimitExceeded`] nothing changes
    /// and nothing is written.
    pub fn increment(&mut self, step: u32) -> Result<i64, CounterError> {
        self.state = self.state.increment(step)?;
        let value = self.state.value();
        let description = if step == 1 {
            format!("Incremented to {value}")
        } else {
            format!("Increased by {step} to {value}")
        };
        self.record(description, ActionKind::Increment);
        Ok(value)
    }

    /// Decrease the value by `step` and return the new value.
    ///
    /// On success the mutation is recorded in the history and
    /// persisted. On [`CounterError::LimitExceeded`] nothing changes
    /// and nothing is written.
    pub fn decrement(&mut self, step: u32) -> Result<i64, CounterError> {
        self.state = self.state.decrement(step)?;
        let value = self.state.value();
        let description = if step == 1 {
            format!("Decremented to {value}")
        } else {
            format!("Decreased by {step} to {value}")
        };
        self.record(description, ActionKind::Decrement);
        Ok(value)
    }

    /// Reset the value to zero. Always succeeds and always records.
    pub fn reset(&mut self) -> i64 {
        self.state = self.state.reset();
        self.record("Reset to 0".to_string(), ActionKind::Reset);
        0
    }

    /// Apply a limit taken from a textual settings input and return the
    /// limit now in force.
    ///
    /// Invalid or sub-1 input falls back to the default of 10. The
    /// current value is never re-clamped: a value outside the new bound
    /// stays put until the next bounded operation. The limit itself is
    /// not persisted; it belongs to the settings surface.
    pub fn set_limit(&mut self, raw: &str) -> i64 {
        self.state = self.state.with_limit(parse_limit(raw));
        self.state.limit()
    }

    /// Select the UI theme and persist the choice.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(keys::THEME, theme.as_str()).ok();
    }

    /// Flip the history panel's collapsed state, persist it, and return
    /// the new state (`true` means collapsed).
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_collapsed = !self.panel_collapsed;
        let value = if self.panel_collapsed { "true" } else { "false" };
        self.store.set(keys::PANEL_COLLAPSED, value).ok();
        self.panel_collapsed
    }

    fn record(&mut self, description: String, kind: ActionKind) {
        self.history = self.history.record(HistoryEntry {
            description,
            timestamp: Utc::now(),
            kind,
        });
        self.persist_counter();
    }

    fn persist_counter(&mut self) {
        let value = self.state.value().to_string();
        self.store.set(keys::COUNTER_VALUE, &value).ok();
        if let Ok(json) = serde_json::to_string(&self.history) {
            self.store.set(keys::HISTORY, &json).ok();
        }
    }
}
