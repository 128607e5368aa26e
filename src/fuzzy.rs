//! Partial-ratio fuzzy matching for symptom phrase lookup

use pyo3::prelude::*;
use strsim::levenshtein;

/// Similarity (0-100) between a phrase and the best-matching contiguous
/// window of a longer text.
///
/// The shorter side is compared against every same-length char window of the
/// longer side, so a short phrase buried in a long description can still
/// score 100. Either side empty scores 0.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let long_chars: Vec<char> = long.chars().collect();
    let win = short.chars().count();
    let mut best = 0.0f64;
    for start in 0..=(long_chars.len() - win) {
        let window: String = long_chars[start..start + win].iter().collect();
        let dist = levenshtein(short, &window);
        // dist <= win for equal-length strings, so this stays in 0..=100
        let sim = (win - dist) as f64 * 100.0 / win as f64;
        if sim > best {
            best = sim;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "partial_ratio")]
pub fn py_partial_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(a, b)
}
