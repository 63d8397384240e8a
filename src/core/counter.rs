//! Bounded counter value and limit handling.
//!
//! The counter is a pure value: every operation returns a new
//! `CounterState` (or an error) and performs no side effects.

use thiserror::Error;

/// Symmetric bound applied when no limit is configured, or when a
/// configured limit is invalid.
pub const DEFAULT_LIMIT: i64 = 10;

/// Which bound a rejected mutation would have crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// The upper bound, `limit`.
    Upper,
    /// The lower bound, `-limit`.
    Lower,
}

/// Errors raised by bounded counter operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CounterError {
    /// The requested mutation would move the value past the configured
    /// bound. The counter is left unchanged.
    #[error("{}", bound_message(.boundary, *.limit))]
    LimitExceeded {
        /// Which bound would have been crossed.
        boundary: Boundary,
        /// The limit in force when the mutation was rejected.
        limit: i64,
    },
}

fn bound_message(boundary: &Boundary, limit: i64) -> String {
    match boundary {
        Boundary::Upper => format!("Counter cannot exceed {limit}"),
        Boundary::Lower => format!("Counter cannot go below -{limit}"),
    }
}

/// Parse a limit taken from a textual settings input.
///
/// Non-numeric input and values below 1 fall back to [`DEFAULT_LIMIT`].
///
/// # Example
///
/// ```rust
/// use tally::core::parse_limit;
///
/// assert_eq!(parse_limit("25"), 25);
/// assert_eq!(parse_limit("0"), 10);
/// assert_eq!(parse_limit("-3"), 10);
/// assert_eq!(parse_limit("not a number"), 10);
/// ```
pub fn parse_limit(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|limit| *limit >= 1)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Counter value confined to the symmetric range `[-limit, limit]`.
///
/// Operations are pure - they return a new state and leave the receiver
/// untouched, the same immutable style as
/// [`ActionHistory::record`](crate::core::ActionHistory::record).
///
/// # Example
///
/// ```rust
/// use tally::core::CounterState;
///
/// let counter = CounterState::new();
/// let counter = counter.increment(5).unwrap();
/// let counter = counter.increment(5).unwrap();
/// assert_eq!(counter.value(), 10);
///
/// // The default limit is 10, so the next increment is rejected.
/// assert!(counter.increment(1).is_err());
/// assert_eq!(counter.value(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    limit: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    /// Create a counter at zero with the default limit.
    pub fn new() -> Self {
        Self {
            value: 0,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Rebuild a counter from persisted state.
    ///
    /// The value is taken as-is, even when it falls outside
    /// `[-limit, limit]`: the bound invariant is established by the
    /// operations, not by loading. A limit below 1 falls back to
    /// [`DEFAULT_LIMIT`].
    pub fn restore(value: i64, limit: i64) -> Self {
        Self {
            value,
            limit: if limit >= 1 { limit } else { DEFAULT_LIMIT },
        }
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Configured symmetric bound.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Check whether an increment by `step` stays within the bound (pure).
    pub fn can_increment(&self, step: u32) -> bool {
        self.value
            .checked_add(i64::from(step))
            .is_some_and(|next| next <= self.limit)
    }

    /// Check whether a decrement by `step` stays within the bound (pure).
    pub fn can_decrement(&self, step: u32) -> bool {
        self.value
            .checked_sub(i64::from(step))
            .is_some_and(|next| next >= -self.limit)
    }

    /// Increase the value by `step`.
    ///
    /// Fails with [`CounterError::LimitExceeded`] when the result would
    /// pass the upper bound, leaving the receiver unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::CounterState;
    ///
    /// let counter = CounterState::new();
    /// let counter = counter.increment(1).unwrap();
    /// assert_eq!(counter.value(), 1);
    /// ```
    pub fn increment(&self, step: u32) -> Result<Self, CounterError> {
        if !self.can_increment(step) {
            return Err(CounterError::LimitExceeded {
                boundary: Boundary::Upper,
                limit: self.limit,
            });
        }
        Ok(Self {
            value: self.value + i64::from(step),
            limit: self.limit,
        })
    }

    /// Decrease the value by `step`.
    ///
    /// Fails with [`CounterError::LimitExceeded`] when the result would
    /// pass the lower bound, leaving the receiver unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::CounterState;
    ///
    /// let counter = CounterState::new();
    /// let counter = counter.decrement(5).unwrap();
    /// assert_eq!(counter.value(), -5);
    /// ```
    pub fn decrement(&self, step: u32) -> Result<Self, CounterError> {
        if !self.can_decrement(step) {
            return Err(CounterError::LimitExceeded {
                boundary: Boundary::Lower,
                limit: self.limit,
            });
        }
        Ok(Self {
            value: self.value - i64::from(step),
            limit: self.limit,
        })
    }

    /// Reset the value to zero. Always succeeds.
    pub fn reset(&self) -> Self {
        Self {
            value: 0,
            limit: self.limit,
        }
    }

    /// Replace the limit, keeping the current value.
    ///
    /// A value already outside the new bound stays where it is; the
    /// next bounded operation applies the new limit. A limit below 1
    /// falls back to [`DEFAULT_LIMIT`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::CounterState;
    ///
    /// let counter = CounterState::restore(8, 10);
    /// let counter = counter.with_limit(5);
    ///
    /// // 8 is outside [-5, 5] but is not re-clamped.
    /// assert_eq!(counter.value(), 8);
    /// assert!(counter.increment(1).is_err());
    /// ```
    pub fn with_limit(&self, limit: i64) -> Self {
        Self {
            value: self.value,
            limit: if limit >= 1 { limit } else { DEFAULT_LIMIT },
        }
    }
}
