//! Word-level difference classification.
//!
//! Both strings are split on whitespace runs and the two word sequences are
//! zipped **by index**:
//!
//! | target word | transcript word | record                          |
//! |-------------|-----------------|---------------------------------|
//! | `w`         | `w`             | none                            |
//! | `a`         | `b`             | `Substitute(i, a, b)`           |
//! | `a`         | —               | `Delete(i, a, "")`              |
//! | —           | `b`             | `Insert(i, "", b)`              |
//!
//! This is positional alignment, not a minimum-cost alignment.  A single
//! missing or extra word early in the sentence shifts every later word, and
//! each of those is reported as a substitution:
//!
//! ```
//! use speech_verify::verify::{analyze, DifferenceKind};
//!
//! let diffs = analyze("나는 오늘 행복 합니다", "오늘 행복 합니다");
//! assert_eq!(diffs.len(), 4);
//! assert_eq!(diffs[3].kind, DifferenceKind::Delete);
//! ```

use serde::Serialize;

/// How a transcript word differs from the target at one aligned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifferenceKind {
    /// The transcript has a word where the target has none.
    Insert,
    /// The target has a word the transcript is missing.
    Delete,
    /// Both have a word at this position and they differ.
    Substitute,
}

/// One non-matching aligned position.
///
/// The absent side of an insert or delete is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceRecord {
    #[serde(rename = "type")]
    pub kind: DifferenceKind,
    /// Word index in the aligned sequence.
    pub position: usize,
    pub original_word: String,
    pub recognized_word: String,
}

impl DifferenceRecord {
    fn substitute(position: usize, original: &str, recognized: &str) -> Self {
        Self {
            kind: DifferenceKind::Substitute,
            position,
            original_word: original.to_owned(),
            recognized_word: recognized.to_owned(),
        }
    }

    fn delete(position: usize, original: &str) -> Self {
        Self {
            kind: DifferenceKind::Delete,
            position,
            original_word: original.to_owned(),
            recognized_word: String::new(),
        }
    }

    fn insert(position: usize, recognized: &str) -> Self {
        Self {
            kind: DifferenceKind::Insert,
            position,
            original_word: String::new(),
            recognized_word: recognized.to_owned(),
        }
    }
}

/// Classify every non-matching word position between `original` and
/// `recognized`, in position order.
///
/// Returns an empty vector iff both strings have identical word sequences.
pub fn analyze(original: &str, recognized: &str) -> Vec<DifferenceRecord> {
    let original: Vec<&str> = original.split_whitespace().collect();
    let recognized: Vec<&str> = recognized.split_whitespace().collect();
    let n = original.len().max(recognized.len());

    (0..n)
        .filter_map(|i| match (original.get(i), recognized.get(i)) {
            (Some(ow), Some(rw)) if ow == rw => None,
            (Some(ow), Some(rw)) => Some(DifferenceRecord::substitute(i, ow, rw)),
            (Some(ow), None) => Some(DifferenceRecord::delete(i, ow)),
            (None, Some(rw)) => Some(DifferenceRecord::insert(i, rw)),
            (None, None) => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
