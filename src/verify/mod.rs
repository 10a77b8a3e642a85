//! Pronunciation verification core.
//!
//! Given a target sentence and an STT transcript of the user reading it,
//! this module scores the reading, lists word-level differences and decides
//! whether the attempt is accepted, may be retried, or has used up its
//! budget.
//!
//! * [`distance`] — character-level Levenshtein distance (Unicode scalars).
//! * [`measure`] / [`score`] — whitespace-insensitive accuracy in `[0, 1]`.
//! * [`analyze`] — positional word diff ([`DifferenceRecord`]s).
//! * [`AttemptTracker`] — accept / retry / exhausted classification.
//! * [`VerificationOrchestrator`] — the single entry point tying them together.
//!
//! Everything here is a pure function of its inputs: no I/O, no caching, no
//! shared mutable state.  The caller owns attempt-count persistence.

pub mod accuracy;
pub mod attempt;
pub mod diff;
pub mod distance;
pub mod orchestrator;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use accuracy::{as_percentage, measure, score, strip_whitespace, Measurement};
pub use attempt::{AttemptOutcome, AttemptTracker};
pub use diff::{analyze, DifferenceKind, DifferenceRecord};
pub use distance::{distance, distance_chars};
pub use orchestrator::{SpeechComparison, VerificationOrchestrator, VerificationResult, VerifyError};
