//! Per-condition scoring - weighted fuzzy hits against phrase lists

use pyo3::prelude::*;

use crate::fuzzy::partial_ratio;
use crate::kb::Condition;
use crate::normalize::normalize;

/// General matching tolerates more noise than red-flag detection (82 vs 85)
/// to stay inclusive.
pub const MATCH_THRESHOLD: f64 = 82.0;

/// Core phrases are specific enough that a fuzzy hit is strong evidence.
pub const CORE_WEIGHT: u32 = 2;
/// Other phrases are supporting signals only.
pub const OTHER_WEIGHT: u32 = 1;

/// Score of one condition against one description
#[pyclass]
#[derive(Debug, Clone)]
pub struct ConditionScore {
    #[pyo3(get)]
    pub score: u32,
    #[pyo3(get)]
    pub hits: Vec<String>,
}

#[pymethods]
impl ConditionScore {
    fn __repr__(&self) -> String {
        format!("ConditionScore(score={}, hits={})", self.score, self.hits.len())
    }
}

/// Score a condition against free-text symptoms: 2 points per core-phrase
/// hit, 1 per other-phrase hit, both lists scanned in full. `hits` keeps
/// scan order (core first, each list in knowledge-base order).
pub fn score_condition(user_text: &str, cond: &Condition) -> ConditionScore {
    score_normalized(&normalize(user_text), cond)
}

/// Scoring against already-normalized text; rank() normalizes the user text
/// once per query instead of once per condition.
pub(crate) fn score_normalized(txt: &str, cond: &Condition) -> ConditionScore {
    let mut score = 0;
    let mut hits = Vec::new();
    for p in &cond.core_norm {
        if partial_ratio(p, txt) >= MATCH_THRESHOLD {
            score += CORE_WEIGHT;
            hits.push(p.clone());
        }
    }
    for p in &cond.other_norm {
        if partial_ratio(p, txt) >= MATCH_THRESHOLD {
            score += OTHER_WEIGHT;
            hits.push(p.clone());
        }
    }
    ConditionScore { score, hits }
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "score_condition")]
pub fn py_score_condition(user_text: &str, cond: &Condition) -> ConditionScore {
    score_condition(user_text, cond)
}
