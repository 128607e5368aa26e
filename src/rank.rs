//! Ranking - aggregate per-condition scores into a percentage-annotated report

use pyo3::prelude::*;

use crate::kb::KnowledgeBase;
use crate::normalize::normalize;
use crate::scoring::score_normalized;

/// One ranked entry: a condition with positive score, its relative-confidence
/// percentage and the phrases that matched
#[pyclass]
#[derive(Debug, Clone)]
pub struct RankedMatch {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub score: u32,
    #[pyo3(get)]
    pub percent: u32,
    #[pyo3(get)]
    pub hits: Vec<String>,
    #[pyo3(get)]
    pub advice: String,
}

#[pymethods]
impl RankedMatch {
    fn __repr__(&self) -> String {
        format!("RankedMatch(id='{}', score={}, percent={}%)",
                self.id, self.score, self.percent)
    }
}

/// Score every condition and return those with score > 0, best first.
///
/// Equal scores keep knowledge-base order (the curation order encodes rough
/// prevalence priority). Percentages are relative confidence among the shown
/// candidates, not probabilities; rounding lets their sum drift a point or
/// two from 100. An empty report means "no match", never an error. The
/// caller decides how many top entries to present.
pub fn rank(user_text: &str, kb: &KnowledgeBase) -> Vec<RankedMatch> {
    let txt = normalize(user_text);
    let mut ranked: Vec<RankedMatch> = Vec::new();
    for c in &kb.conditions {
        let res = score_normalized(&txt, c);
        if res.score > 0 {
            ranked.push(RankedMatch {
                id: c.id.clone(),
                name: c.name.clone(),
                score: res.score,
                percent: 0,
                hits: res.hits,
                advice: c.advice.clone(),
            });
        }
    }
    // sort_by is stable: ties keep knowledge-base order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    // total can't be 0 past the score > 0 filter, but never divide by it anyway
    let total = ranked.iter().map(|r| r.score).sum::<u32>().max(1);
    for r in &mut ranked {
        r.percent = (r.score as f64 / total as f64 * 100.0).round() as u32;
    }
    ranked
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "rank")]
pub fn py_rank(user_text: &str, kb: &KnowledgeBase) -> Vec<RankedMatch> {
    rank(user_text, kb)
}
