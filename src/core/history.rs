//! Capped, newest-first log of counter actions.
//!
//! Provides immutable tracking of counter mutations over time,
//! following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries an [`ActionHistory`] retains.
pub const HISTORY_CAP: usize = 10;

/// The kind of mutation a history entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Increment,
    Decrement,
    Reset,
}

/// Immutable record of a single past mutation.
///
/// Wire field names (`action`, `type`) match the persisted format the
/// widget has always written, so previously stored histories load
/// unchanged.
///
/// # Example
///
/// ```rust
/// use tally::core::{ActionKind, HistoryEntry};
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     description: "Incremented to 1".to_string(),
///     timestamp: Utc::now(),
///     kind: ActionKind::Increment,
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Human-readable description of the action and resulting value.
    #[serde(rename = "action")]
    pub description: String,
    /// When the mutation happened.
    pub timestamp: DateTime<Utc>,
    /// Which operation produced the entry.
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// Newest-first log of mutations, capped at [`HISTORY_CAP`] entries.
///
/// The log is immutable - `record` returns a new history with the entry
/// prepended, discarding anything beyond the cap.
///
/// # Example
///
/// ```rust
/// use tally::core::{ActionHistory, ActionKind, HistoryEntry};
/// use chrono::Utc;
///
/// let history = ActionHistory::new();
///
/// let history = history.record(HistoryEntry {
///     description: "Incremented to 1".to_string(),
///     timestamp: Utc::now(),
///     kind: ActionKind::Increment,
/// });
///
/// let history = history.record(HistoryEntry {
///     description: "Reset to 0".to_string(),
///     timestamp: Utc::now(),
///     kind: ActionKind::Reset,
/// });
///
/// // Newest first: the reset precedes the increment.
/// assert_eq!(history.entries()[0].kind, ActionKind::Reset);
/// assert_eq!(history.entries()[1].kind, ActionKind::Increment);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionHistory {
    entries: Vec<HistoryEntry>,
}

impl ActionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The entry is prepended (newest first) and the result is
    /// truncated to [`HISTORY_CAP`] entries; the receiver is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{ActionHistory, ActionKind, HistoryEntry};
    /// use chrono::Utc;
    ///
    /// let history = ActionHistory::new();
    /// let entry = HistoryEntry {
    ///     description: "Decremented to -1".to_string(),
    ///     timestamp: Utc::now(),
    ///     kind: ActionKind::Decrement,
    /// };
    ///
    /// let new_history = history.record(entry);
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity((self.entries.len() + 1).min(HISTORY_CAP));
        entries.push(entry);
        entries.extend_from_slice(&self.entries);
        entries.truncate(HISTORY_CAP);
        Self { entries }
    }

    /// All retained entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Number of retained entries, never more than [`HISTORY_CAP`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str, kind: ActionKind) -> HistoryEntry {
        HistoryEntry {
            description: description.to_string(),
            timestamp: Utc::now(),
            kind,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ActionHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn record_prepends_newest_first() {
        let history = ActionHistory::new()
            .record(entry("Incremented to 1", ActionKind::Increment))
            .record(entry("Incremented to 2", ActionKind::Increment));

        assert_eq!(history.entries()[0].description, "Incremented to 2");
        assert_eq!(history.entries()[1].description, "Incremented to 1");
        assert_eq!(history.latest().unwrap().description, "Incremented to 2");
    }

    #[test]
    fn record_is_immutable() {
        let history = ActionHistory::new();
        let new_history = history.record(entry("Reset to 0", ActionKind::Reset));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn cap_discards_the_oldest_entry() {
        let mut history = ActionHistory::new();
        for n in 1..=11 {
            history = history.record(entry(
                &format!("Incremented to {n}"),
                ActionKind::Increment,
            ));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.entries()[0].description, "Incremented to 11");
        // The oldest of the eleven entries is gone.
        assert!(history
            .entries()
            .iter()
            .all(|e| e.description != "Incremented to 1"));
        assert_eq!(
            history.entries().last().unwrap().description,
            "Incremented to 2"
        );
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let history = ActionHistory::new().record(entry("Reset to 0", ActionKind::Reset));

        let json = serde_json::to_string(&history).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.is_array());
        assert_eq!(value[0]["action"], "Reset to 0");
        assert_eq!(value[0]["type"], "reset");
        assert!(value[0]["timestamp"].is_string());
    }

    #[test]
    fn history_round_trips_through_json() {
        let history = ActionHistory::new()
            .record(entry("Incremented to 1", ActionKind::Increment))
            .record(entry("Decreased by 5 to -4", ActionKind::Decrement));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ActionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
