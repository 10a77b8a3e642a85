//! Caller-facing report for one recognition attempt.
//!
//! [`RecognitionReport`] flattens a [`VerificationResult`] (or an STT
//! failure) into the flags a client needs to decide what to show next:
//! move on, ask for another try, or send the user home.

use serde::Serialize;

use crate::verify::{AttemptOutcome, AttemptTracker, VerificationResult};

/// Error code used when the STT backend itself failed.
pub const RECOGNITION_ERROR: &str = "RECOGNITION_ERROR";

/// Summary of one recognition attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionReport {
    /// The reading was accepted.
    pub success: bool,
    /// The user may try the same sentence again.
    pub need_retry: bool,
    /// The attempt budget is spent; the client should leave the exercise.
    pub go_home: bool,
    /// Attempt index the caller should store for the next call.
    pub retry_count: u32,
    pub max_retry_reached: bool,
    /// Transcript returned by STT; `None` when STT failed.
    pub recognized_text: Option<String>,
    /// Accuracy in `[0, 1]`; `None` when STT failed.
    pub accuracy: Option<f64>,
    /// `LOW_ACCURACY`, `MAX_RETRY_EXCEEDED` or `RECOGNITION_ERROR`.
    pub error_code: Option<&'static str>,
    /// The accepted reading reached the sink.
    pub log_saved: bool,
    /// The sentence may be bookmarked (accepted readings only).
    pub can_bookmark: bool,
    /// Full verification detail when STT produced a transcript.
    pub verification: Option<VerificationResult>,
}

impl RecognitionReport {
    /// Report for a scored attempt.
    pub fn from_verification(
        tracker: &AttemptTracker,
        transcript: String,
        result: VerificationResult,
        log_saved: bool,
    ) -> Self {
        let outcome = result.outcome;
        let success = outcome == AttemptOutcome::Accepted;
        let exhausted = outcome == AttemptOutcome::Exhausted;

        Self {
            success,
            need_retry: outcome == AttemptOutcome::RetryAllowed,
            go_home: exhausted,
            retry_count: tracker.next_attempt_index(outcome, result.attempt_index),
            max_retry_reached: exhausted,
            recognized_text: Some(transcript),
            accuracy: Some(result.accuracy),
            error_code: outcome.error_code(),
            log_saved: success && log_saved,
            can_bookmark: success,
            verification: Some(result),
        }
    }

    /// Report for an attempt whose STT call failed.  The attempt is still
    /// charged against the budget.
    pub fn recognition_error(tracker: &AttemptTracker, attempt_index: u32) -> Self {
        let exhausted = tracker.remaining_attempts(attempt_index) == 0;

        Self {
            success: false,
            need_retry: !exhausted,
            go_home: exhausted,
            retry_count: attempt_index.saturating_add(1),
            max_retry_reached: exhausted,
            recognized_text: None,
            accuracy: None,
            error_code: Some(RECOGNITION_ERROR),
            log_saved: false,
            can_bookmark: false,
            verification: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
