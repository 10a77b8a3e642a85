//! Whitespace-insensitive accuracy scoring.
//!
//! The spacing of an STT transcript is not a pronunciation error, so both
//! strings have every whitespace character removed before the edit distance
//! is taken.  The distance is then normalised by the longer stripped length:
//!
//! ```text
//! accuracy = max(0, 1 - distance / max_len)      (1.0 when max_len == 0)
//! ```

use serde::Serialize;

use super::distance::distance_chars;

/// Edit distance and the accuracy derived from it, for one pair of strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Levenshtein distance between the whitespace-stripped strings.
    pub edit_distance: usize,
    /// Normalised similarity in `[0, 1]`.
    pub accuracy: f64,
}

/// Remove every whitespace character from `s`.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Measure `recognized` against `original`.
///
/// ```
/// use speech_verify::verify::measure;
///
/// let m = measure("나는 행복 합니다", "나는 행복합니다");
/// assert_eq!(m.edit_distance, 0);
/// assert_eq!(m.accuracy, 1.0);
/// ```
pub fn measure(original: &str, recognized: &str) -> Measurement {
    let original: Vec<char> = strip_whitespace(original).chars().collect();
    let recognized: Vec<char> = strip_whitespace(recognized).chars().collect();

    let edit_distance = distance_chars(&original, &recognized);
    let max_len = original.len().max(recognized.len());

    if max_len == 0 {
        // Two empty strings are a vacuous perfect match.
        return Measurement {
            edit_distance,
            accuracy: 1.0,
        };
    }

    // `(max_len - d) / max_len` with one rounding step, so 4/5 is exactly
    // the literal 0.8.  Distance is bounded by max_len; the saturation is
    // the clamp to zero.
    let matched = max_len.saturating_sub(edit_distance);
    Measurement {
        edit_distance,
        accuracy: matched as f64 / max_len as f64,
    }
}

/// Accuracy of `recognized` against `original`, in `[0, 1]`.
pub fn score(original: &str, recognized: &str) -> f64 {
    measure(original, recognized).accuracy
}

/// `accuracy` expressed as a percentage, for log lines and reports.
pub fn as_percentage(accuracy: f64) -> f64 {
    accuracy * 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
