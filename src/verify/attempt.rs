//! Bounded-retry decision state machine.
//!
//! [`AttemptTracker`] classifies a single verification attempt.  It holds no
//! per-session state: the caller supplies the zero-based attempt index and
//! stores the next one between calls.
//!
//! ```text
//! Evaluating ──accuracy ≥ threshold──────────────────────▶ Accepted
//!            ──accuracy < threshold, index + 1 < max ─────▶ RetryAllowed
//!            ──accuracy < threshold, index + 1 ≥ max ─────▶ Exhausted
//! ```
//!
//! The threshold is checked first, so a good reading on the final allowed
//! attempt (or even past it) is still accepted.

use serde::Serialize;

// ---------------------------------------------------------------------------
// AttemptOutcome
// ---------------------------------------------------------------------------

/// Terminal classification of a single verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptOutcome {
    /// Accuracy met the threshold.
    Accepted,
    /// Accuracy fell short and the caller may try again.
    RetryAllowed,
    /// Accuracy fell short on the last allowed attempt.
    Exhausted,
}

impl AttemptOutcome {
    /// `true` when no further attempt should be made for this sentence.
    ///
    /// ```
    /// use speech_verify::verify::AttemptOutcome;
    ///
    /// assert!(AttemptOutcome::Accepted.is_terminal());
    /// assert!(!AttemptOutcome::RetryAllowed.is_terminal());
    /// assert!(AttemptOutcome::Exhausted.is_terminal());
    /// ```
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AttemptOutcome::RetryAllowed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttemptOutcome::Accepted => "Accepted",
            AttemptOutcome::RetryAllowed => "Retry allowed",
            AttemptOutcome::Exhausted => "Exhausted",
        }
    }

    /// Machine-readable failure code, `None` on success.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            AttemptOutcome::Accepted => None,
            AttemptOutcome::RetryAllowed => Some("LOW_ACCURACY"),
            AttemptOutcome::Exhausted => Some("MAX_RETRY_EXCEEDED"),
        }
    }
}

// ---------------------------------------------------------------------------
// AttemptTracker
// ---------------------------------------------------------------------------

/// Classifies attempts against a fixed attempt budget and accuracy threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptTracker {
    max_attempts: u32,
    accuracy_threshold: f64,
}

impl AttemptTracker {
    pub fn new(max_attempts: u32, accuracy_threshold: f64) -> Self {
        Self {
            max_attempts,
            accuracy_threshold,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn accuracy_threshold(&self) -> f64 {
        self.accuracy_threshold
    }

    /// Classify an attempt with the given `accuracy` at zero-based
    /// `attempt_index`.
    pub fn classify(&self, accuracy: f64, attempt_index: u32) -> AttemptOutcome {
        if accuracy >= self.accuracy_threshold {
            return AttemptOutcome::Accepted;
        }
        // The count after this attempt has been charged.
        let charged = attempt_index.saturating_add(1);
        if charged < self.max_attempts {
            AttemptOutcome::RetryAllowed
        } else {
            AttemptOutcome::Exhausted
        }
    }

    /// Attempt index the caller should store for its next call.
    ///
    /// Unchanged after an accepted attempt, advanced by one otherwise.
    pub fn next_attempt_index(&self, outcome: AttemptOutcome, attempt_index: u32) -> u32 {
        match outcome {
            AttemptOutcome::Accepted => attempt_index,
            AttemptOutcome::RetryAllowed | AttemptOutcome::Exhausted => {
                attempt_index.saturating_add(1)
            }
        }
    }

    /// Attempts still available after the one at `attempt_index` is charged.
    pub fn remaining_attempts(&self, attempt_index: u32) -> u32 {
        self.max_attempts.saturating_sub(attempt_index.saturating_add(1))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
