//! Precedence rules for prerelease and build identifiers.
//!
//! Identifiers made only of ASCII digits are numeric and compare by value;
//! everything else compares by code point. Numeric identifiers always sort
//! before non-numeric ones.

use std::cmp::Ordering;

/// Compares two single identifiers (not dot-separated sequences)
pub fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Whether the sequence `a` has lower precedence than `b`. When one is a
/// strict prefix of the other the shorter one is lower.
pub fn identifiers_less<S: AsRef<str>>(a: &[S], b: &[S]) -> bool {
    for (x, y) in a.iter().zip(b) {
        match compare_identifier(x.as_ref(), y.as_ref()) {
            Ordering::Equal => continue,
            ordering => return ordering == Ordering::Less,
        }
    }

    a.len() < b.len()
}

pub fn identifiers_equal<S: AsRef<str>>(a: &[S], b: &[S]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| compare_identifier(x.as_ref(), y.as_ref()) == Ordering::Equal)
}

fn is_numeric(id: &str) -> bool {
    id.bytes().all(|b| b.is_ascii_digit())
}

// Digit runs can be arbitrarily long, so compare them as strings instead of
// converting to an integer.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
