//! Verification orchestrator: one pure call from (target, transcript,
//! attempt index) to a [`VerificationResult`].
//!
//! ```text
//! validate target ──▶ measure (distance + accuracy) ──┐
//!                 └─▶ analyze (word differences) ─────┼─▶ VerificationResult
//!                                 AttemptTracker ◀────┘
//! ```
//!
//! Scoring and word analysis run independently over the same two strings;
//! the tracker only sees the accuracy and the attempt index.

use serde::Serialize;
use thiserror::Error;

use crate::config::VerificationConfig;

use super::accuracy::{as_percentage, measure};
use super::attempt::{AttemptOutcome, AttemptTracker};
use super::diff::{analyze, DifferenceRecord};
use super::distance::distance;

// ---------------------------------------------------------------------------
// VerifyError
// ---------------------------------------------------------------------------

/// Caller errors rejected before any scoring runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerifyError {
    /// The target sentence was empty (or whitespace only).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The attempt budget or accuracy threshold is out of range.
    #[error("invalid verification config: {0}")]
    InvalidConfig(String),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of verifying one spoken attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Character edit distance between the whitespace-stripped strings.
    pub edit_distance: usize,
    /// Whitespace-insensitive similarity in `[0, 1]`.
    pub accuracy: f64,
    /// Word-level differences in position order; empty on a word-for-word
    /// match.
    pub differences: Vec<DifferenceRecord>,
    pub attempt_index: u32,
    pub outcome: AttemptOutcome,
}

impl VerificationResult {
    pub fn is_accepted(&self) -> bool {
        self.outcome == AttemptOutcome::Accepted
    }
}

/// Detailed comparison without retry classification.
///
/// `edit_distance` is taken over the sentences as written, spaces included;
/// `accuracy` still ignores whitespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechComparison {
    pub original_sentence: String,
    pub recognized_text: String,
    pub edit_distance: usize,
    pub accuracy: f64,
    pub differences: Vec<DifferenceRecord>,
}

// ---------------------------------------------------------------------------
// VerificationOrchestrator
// ---------------------------------------------------------------------------

/// Composes scoring, word analysis and retry classification.
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads behind an `Arc` and called concurrently.
///
/// ```
/// use speech_verify::config::VerificationConfig;
/// use speech_verify::verify::{AttemptOutcome, VerificationOrchestrator};
///
/// let verifier = VerificationOrchestrator::new(VerificationConfig::default()).unwrap();
/// let result = verifier.verify("오늘도 좋은 하루입니다", "오늘도 좋은 하루입니다", 0).unwrap();
/// assert_eq!(result.outcome, AttemptOutcome::Accepted);
/// assert!(result.differences.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct VerificationOrchestrator {
    tracker: AttemptTracker,
}

impl VerificationOrchestrator {
    /// Build an orchestrator, rejecting an out-of-range config.
    pub fn new(config: VerificationConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        Ok(Self {
            tracker: AttemptTracker::new(config.max_attempts, config.accuracy_threshold),
        })
    }

    pub fn tracker(&self) -> &AttemptTracker {
        &self.tracker
    }

    /// Verify `transcript` against `target` for the attempt at zero-based
    /// `attempt_index`.
    ///
    /// # Errors
    ///
    /// [`VerifyError::InvalidInput`] when `target` is empty after trimming.
    /// An empty `transcript` is not an error; it simply scores low.
    pub fn verify(
        &self,
        target: &str,
        transcript: &str,
        attempt_index: u32,
    ) -> Result<VerificationResult, VerifyError> {
        validate_target(target)?;

        let measurement = measure(target, transcript);
        let differences = analyze(target, transcript);
        let outcome = self.tracker.classify(measurement.accuracy, attempt_index);

        log::debug!(
            "verify: distance={} accuracy={:.1}% differences={} attempt={}",
            measurement.edit_distance,
            as_percentage(measurement.accuracy),
            differences.len(),
            attempt_index
        );

        match outcome {
            AttemptOutcome::Accepted => log::info!(
                "verify: accepted at {:.1}% (attempt {})",
                as_percentage(measurement.accuracy),
                attempt_index.saturating_add(1)
            ),
            AttemptOutcome::RetryAllowed | AttemptOutcome::Exhausted => log::warn!(
                "verify: accuracy {:.1}% below threshold, attempt {}/{} → {}",
                as_percentage(measurement.accuracy),
                attempt_index.saturating_add(1),
                self.tracker.max_attempts(),
                outcome.label()
            ),
        }

        Ok(VerificationResult {
            edit_distance: measurement.edit_distance,
            accuracy: measurement.accuracy,
            differences,
            attempt_index,
            outcome,
        })
    }

    /// Score and diff `transcript` against `target` without charging an
    /// attempt.
    pub fn compare(&self, target: &str, transcript: &str) -> Result<SpeechComparison, VerifyError> {
        validate_target(target)?;

        let edit_distance = distance(target, transcript);
        let accuracy = measure(target, transcript).accuracy;
        let differences = analyze(target, transcript);

        log::info!(
            "compare: distance={} accuracy={:.1}% differences={}",
            edit_distance,
            as_percentage(accuracy),
            differences.len()
        );

        Ok(SpeechComparison {
            original_sentence: target.to_owned(),
            recognized_text: transcript.to_owned(),
            edit_distance,
            accuracy,
            differences,
        })
    }
}

pub(crate) fn validate_target(target: &str) -> Result<(), VerifyError> {
    if target.trim().is_empty() {
        return Err(VerifyError::InvalidInput(
            "target sentence must not be empty".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::DifferenceKind;

    fn verifier() -> VerificationOrchestrator {
        VerificationOrchestrator::new(VerificationConfig::default()).unwrap()
    }

    // ---- end-to-end scenarios ---

    #[test]
    fn exact_reading_is_accepted() {
        let r = verifier()
            .verify("오늘도 좋은 하루입니다", "오늘도 좋은 하루입니다", 0)
            .unwrap();
        assert_eq!(r.edit_distance, 0);
        assert_eq!(r.accuracy, 1.0);
        assert!(r.differences.is_empty());
        assert_eq!(r.attempt_index, 0);
        assert_eq!(r.outcome, AttemptOutcome::Accepted);
    }

    #[test]
    fn silence_on_last_attempt_is_exhausted() {
        let r = verifier().verify("스트레스를 이겨내라", "", 2).unwrap();
        assert_eq!(r.accuracy, 0.0);
        assert_eq!(r.edit_distance, 9);
        assert_eq!(r.outcome, AttemptOutcome::Exhausted);
        assert_eq!(r.differences.len(), 2);
    }

    #[test]
    fn silence_on_first_attempt_allows_retry() {
        let r = verifier().verify("스트레스를 이겨내라", "", 0).unwrap();
        assert_eq!(r.outcome, AttemptOutcome::RetryAllowed);
    }

    #[test]
    fn boundary_accuracy_is_accepted() {
        // 5 syllables, one wrong → exactly 0.8
        let r = verifier().verify("하루입니다", "하루임니다", 2).unwrap();
        assert_eq!(r.accuracy, 0.8);
        assert_eq!(r.outcome, AttemptOutcome::Accepted);
        assert_eq!(r.differences.len(), 1);
        assert_eq!(r.differences[0].kind, DifferenceKind::Substitute);
    }

    #[test]
    fn below_boundary_follows_attempt_budget() {
        // 5 of 7 syllables right → 0.714…
        let v = verifier();
        let r1 = v.verify("행복한 하루에요", "행운한 하루세요", 1).unwrap();
        assert!(r1.accuracy < 0.8);
        assert_eq!(r1.outcome, AttemptOutcome::RetryAllowed);
        let r2 = v.verify("행복한 하루에요", "행운한 하루세요", 2).unwrap();
        assert_eq!(r2.outcome, AttemptOutcome::Exhausted);
    }

    /// Spacing differences cost nothing in distance or accuracy but still
    /// show up as word differences.
    #[test]
    fn respacing_is_accepted_but_reported_as_word_difference() {
        let r = verifier().verify("나는 행복 합니다", "나는 행복합니다", 0).unwrap();
        assert_eq!(r.edit_distance, 0);
        assert_eq!(r.accuracy, 1.0);
        assert_eq!(r.outcome, AttemptOutcome::Accepted);
        assert_eq!(r.differences.len(), 2);
    }

    #[test]
    fn accepted_implies_threshold_met() {
        let v = verifier();
        for (t, s) in [("가나다라마", "가나다라바"), ("가나다", "가나"), ("abc", "abd")] {
            let r = v.verify(t, s, 0).unwrap();
            if r.is_accepted() {
                assert!(r.accuracy >= 0.8, "{t} / {s}");
            }
        }
    }

    // ---- validation ---

    #[test]
    fn empty_target_is_invalid_input() {
        let err = verifier().verify("", "something", 0).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidInput(_)));
    }

    #[test]
    fn whitespace_target_is_invalid_input() {
        let err = verifier().verify("  \t ", "", 0).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidInput(_)));
        assert!(verifier().compare("\n", "x").is_err());
    }

    #[test]
    fn bad_config_is_rejected_at_construction() {
        let cfg = VerificationConfig {
            max_attempts: 0,
            ..VerificationConfig::default()
        };
        assert!(matches!(
            VerificationOrchestrator::new(cfg),
            Err(VerifyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn custom_config_changes_decision() {
        let v = VerificationOrchestrator::new(VerificationConfig {
            max_attempts: 5,
            accuracy_threshold: 0.5,
        })
        .unwrap();
        let r = v.verify("abcd", "abxy", 3).unwrap();
        assert_eq!(r.accuracy, 0.5);
        assert_eq!(r.outcome, AttemptOutcome::Accepted);
        let r = v.verify("abcd", "axyz", 3).unwrap();
        assert_eq!(r.outcome, AttemptOutcome::RetryAllowed);
        let r = v.verify("abcd", "axyz", 4).unwrap();
        assert_eq!(r.outcome, AttemptOutcome::Exhausted);
    }

    // ---- compare ---

    #[test]
    fn compare_reports_without_outcome() {
        let c = verifier().compare("나는 행복 합니다", "나는 행복").unwrap();
        assert_eq!(c.original_sentence, "나는 행복 합니다");
        assert_eq!(c.recognized_text, "나는 행복");
        assert_eq!(c.edit_distance, 4);
        assert_eq!(c.differences.len(), 1);
        assert_eq!(c.differences[0].kind, DifferenceKind::Delete);
        assert_eq!(c.differences[0].position, 2);
    }

    #[test]
    fn compare_counts_spaces_in_distance_but_not_in_accuracy() {
        let v = verifier();
        let c = v.compare("나는 행복 합니다", "나는 행복").unwrap();
        let r = v.verify("나는 행복 합니다", "나는 행복", 0).unwrap();
        // " 합니다" is four edits raw, "합니다" three once spaces are gone.
        assert_eq!(c.edit_distance, 4);
        assert_eq!(r.edit_distance, 3);
        assert_eq!(c.accuracy, r.accuracy);

        let respaced = v.compare("하루입니다", "하루 입니다").unwrap();
        assert_eq!(respaced.edit_distance, 1);
        assert_eq!(respaced.accuracy, 1.0);
    }

    // ---- serialisation / threading ---

    #[test]
    fn result_serialises_camel_case() {
        let r = verifier().verify("나는 행복 합니다", "나는 행복", 1).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["editDistance"], 3);
        assert_eq!(json["attemptIndex"], 1);
        assert_eq!(json["outcome"], "RETRY_ALLOWED");
        assert_eq!(json["differences"][0]["type"], "DELETE");
    }

    #[test]
    fn orchestrator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VerificationOrchestrator>();
    }

    #[test]
    fn concurrent_calls_agree() {
        let v = std::sync::Arc::new(verifier());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = std::sync::Arc::clone(&v);
                std::thread::spawn(move || v.verify("오늘도 좋은 하루입니다", "오늘도 하루", i).unwrap())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results
            .iter()
            .all(|r| r.edit_distance == results[0].edit_distance));
    }
}
