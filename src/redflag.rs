//! Red-flag detection - urgent-symptom phrases checked ahead of scoring

use pyo3::prelude::*;

use crate::fuzzy::partial_ratio;
use crate::kb::KnowledgeBase;
use crate::normalize::normalize;

/// Red flags demand higher confidence than ordinary matching (85 vs 82)
/// because they drive an urgent warning.
pub const RED_FLAG_THRESHOLD: f64 = 85.0;

/// Outcome of a red-flag scan
#[pyclass]
#[derive(Debug, Clone)]
pub struct RedFlagResult {
    #[pyo3(get)]
    pub triggered: bool,
    #[pyo3(get)]
    pub phrase: Option<String>,
}

#[pymethods]
impl RedFlagResult {
    fn __repr__(&self) -> String {
        format!("RedFlagResult(triggered={}, phrase={:?})",
                self.triggered, self.phrase)
    }
}

/// Scan for danger phrases: global red flags first, then each condition's
/// red flags in knowledge-base order.
///
/// The first phrase whose partial ratio against the normalized text reaches
/// the threshold short-circuits the scan; it is returned in its normalized
/// form. Empty input can never trigger.
pub fn detect_red_flag(user_text: &str, kb: &KnowledgeBase) -> RedFlagResult {
    let txt = normalize(user_text);
    for p in &kb.global_red_norm {
        if partial_ratio(p, &txt) >= RED_FLAG_THRESHOLD {
            return RedFlagResult { triggered: true, phrase: Some(p.clone()) };
        }
    }
    for c in &kb.conditions {
        for p in &c.red_norm {
            if partial_ratio(p, &txt) >= RED_FLAG_THRESHOLD {
                return RedFlagResult { triggered: true, phrase: Some(p.clone()) };
            }
        }
    }
    RedFlagResult { triggered: false, phrase: None }
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "detect_red_flag")]
pub fn py_detect_red_flag(user_text: &str, kb: &KnowledgeBase) -> RedFlagResult {
    detect_red_flag(user_text, kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::from_json(r#"{
            "conditions": [
                {
                    "id": "grippe",
                    "name": "Grippe",
                    "core": ["fièvre", "toux"],
                    "red_flags": ["difficulté à respirer"]
                }
            ],
            "global_red_flags": ["ألم شديد في الصدر", "perte de connaissance"]
        }"#).unwrap()
    }

    #[test]
    fn global_red_flag_triggers_and_returns_normalized_phrase() {
        let kb = sample_kb();
        let res = detect_red_flag("عندي ألم شديد في الصدر من البارح", &kb);
        assert!(res.triggered);
        assert_eq!(res.phrase.as_deref(), Some(kb.global_red_norm[0].as_str()));
    }

    #[test]
    fn condition_red_flag_triggers_after_globals() {
        let kb = sample_kb();
        let res = detect_red_flag("toux et difficulté à respirer", &kb);
        assert!(res.triggered);
        assert_eq!(res.phrase.as_deref(), Some("difficulte a respirer"));
    }

    #[test]
    fn global_phrases_win_over_condition_phrases() {
        let kb = sample_kb();
        let res = detect_red_flag(
            "perte de connaissance et difficulté à respirer", &kb);
        assert_eq!(res.phrase.as_deref(), Some("perte de connaissance"));
    }

    #[test]
    fn ordinary_symptoms_do_not_trigger() {
        let kb = sample_kb();
        let res = detect_red_flag("fièvre et toux depuis hier", &kb);
        assert!(!res.triggered);
        assert!(res.phrase.is_none());
    }

    #[test]
    fn empty_input_never_triggers() {
        let kb = sample_kb();
        let res = detect_red_flag("", &kb);
        assert!(!res.triggered);
        assert!(res.phrase.is_none());
    }

    #[test]
    fn threshold_separation_at_85() {
        // equal-length candidates give exact ratios: 3 edits in 20 chars is
        // 85.0 (triggers), 4 edits in 25 chars is 84.0 (does not)
        let kb = KnowledgeBase::from_json(r#"{
            "conditions": [],
            "global_red_flags": ["abcdefghijklmnopqrst"]
        }"#).unwrap();
        assert!(detect_red_flag("zbcdefghijzlmnopqrsz", &kb).triggered);

        let kb = KnowledgeBase::from_json(r#"{
            "conditions": [],
            "global_red_flags": ["abcdefghijklmnopqrstuvwxy"]
        }"#).unwrap();
        assert!(!detect_red_flag("zbcdefgzijklmnopzrstuvwxz", &kb).triggered);
    }
}
