//! Answer scoring for dictation and pronunciation drills.
//!
//! Both drills compare what the learner produced against the target French
//! text with the same edit-distance measure, after a normalization pass
//! that forgives case, accents and punctuation.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for comparison: lowercase, strip diacritics, drop
/// punctuation other than apostrophes, trim.
///
/// The typographic apostrophe (U+2019) used throughout French text is
/// folded to the ASCII one so "s’il" and "s'il" compare equal.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '\'' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Score `actual` against `expected` on a 0–100 scale.
///
/// Both inputs are normalized first. Two empty strings are a perfect
/// match; exactly one empty string scores 0. Otherwise the score is
/// `(1 - distance / max_len) * 100`, clamped at 0 and rounded.
///
/// Pure and deterministic: identical inputs always produce the same
/// score, so it is safe to share between the dictation flow and the
/// speech collaborator.
pub fn similarity_score(expected: &str, actual: &str) -> u8 {
    let a = normalize(expected);
    let b = normalize(actual);

    if a.is_empty() && b.is_empty() {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let distance = levenshtein(&a, &b);
    let max_len = a.chars().count().max(b.chars().count());
    let sim = (1.0 - distance as f64 / max_len as f64).max(0.0);
    (sim * 100.0).round() as u8
}
