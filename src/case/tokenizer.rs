//! Word-boundary scanner shared by every formatter.
//!
//! Splits on explicit separator runs first, then on casing transitions inside
//! each remaining alphanumeric run. A single pass over byte classes replaces
//! the lookaround regexes this logic is usually written with.

/// Split `input` into words, preserving original casing and order.
///
/// A word is a maximal run of ASCII letters/digits after two splitting
/// stages:
/// 1. every maximal run of non-alphanumeric characters is a separator and
///    is discarded;
/// 2. each remaining run is split at casing transitions: between a
///    lowercase letter or digit and an uppercase letter (`foo|Bar`), and
///    inside an uppercase run just before an uppercase letter trailed by a
///    lowercase letter or digit (`XML|Http` in `XMLHttpRequest`).
///
/// Digit-only words are kept in positional order and never merged into a
/// neighbor. Input without alphanumeric content yields an empty vector.
pub fn split_words(input: &str) -> Vec<&str> {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .flat_map(split_case_runs)
        .collect()
}

fn is_lower_or_digit(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

/// Split one all-alphanumeric run at casing transitions.
///
/// `run` is pure ASCII (guaranteed by the separator pass), so byte indexing
/// is also character indexing.
fn split_case_runs(run: &str) -> Vec<&str> {
    let bytes = run.as_bytes();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..bytes.len() {
        let prev = bytes[i - 1];
        let cur = bytes[i];

        let camel_boundary = is_lower_or_digit(prev) && cur.is_ascii_uppercase();
        let acronym_boundary = prev.is_ascii_uppercase()
            && cur.is_ascii_uppercase()
            && bytes.get(i + 1).is_some_and(|&next| is_lower_or_digit(next));

        if camel_boundary || acronym_boundary {
            words.push(&run[start..i]);
            start = i;
        }
    }

    if start < run.len() {
        words.push(&run[start..]);
    }

    words
}
