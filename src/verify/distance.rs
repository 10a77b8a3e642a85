//! Character-level Levenshtein edit distance.
//!
//! Characters are compared as Unicode scalar values (`char`), never bytes.
//! A precomposed Hangul syllable such as `'행'` is one `char` (three UTF-8
//! bytes), so substituting one syllable for another costs exactly 1.

/// Minimum number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`.
///
/// ```
/// use speech_verify::verify::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// assert_eq!(distance("행복", "행운"), 1);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

/// [`distance`] over pre-split character slices.
///
/// Fills the full `(a.len() + 1) × (b.len() + 1)` table.  The table is a
/// local allocation and is released when the call returns.
pub fn distance_chars(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    // Turning a prefix of `a` into "" costs its length, and vice versa.
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j] // deletion
                    .min(dp[i][j - 1]) // insertion
                    .min(dp[i - 1][j - 1]) // substitution
            };
        }
    }

    dp[m][n]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
