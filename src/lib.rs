//! Triage Core - High-performance Rust module for the Docteur Virtuel triage app
//!
//! Provides text normalization for mixed Darija/Arabic/French input, fuzzy
//! phrase matching, red-flag detection and condition ranking over a curated
//! knowledge base.

mod fuzzy;
mod kb;
mod normalize;
mod rank;
mod redflag;
mod scoring;

use pyo3::prelude::*;

// Re-export for Rust callers
pub use fuzzy::partial_ratio;
pub use kb::{load_kb, Condition, KnowledgeBase};
pub use normalize::normalize;
pub use rank::{rank, RankedMatch};
pub use redflag::{detect_red_flag, RedFlagResult, RED_FLAG_THRESHOLD};
pub use scoring::{score_condition, ConditionScore, CORE_WEIGHT, MATCH_THRESHOLD, OTHER_WEIGHT};

/// Triage Core Python Module
#[pymodule]
fn triage_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Text normalization and fuzzy matching
    m.add_function(wrap_pyfunction!(normalize::py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(fuzzy::py_partial_ratio, m)?)?;

    // Knowledge base loading
    m.add_function(wrap_pyfunction!(kb::py_load_kb, m)?)?;

    // Red-flag detection
    m.add_function(wrap_pyfunction!(redflag::py_detect_red_flag, m)?)?;

    // Scoring and ranking
    m.add_function(wrap_pyfunction!(scoring::py_score_condition, m)?)?;
    m.add_function(wrap_pyfunction!(rank::py_rank, m)?)?;

    // Register classes
    m.add_class::<kb::Condition>()?;
    m.add_class::<kb::KnowledgeBase>()?;
    m.add_class::<redflag::RedFlagResult>()?;
    m.add_class::<scoring::ConditionScore>()?;
    m.add_class::<rank::RankedMatch>()?;

    Ok(())
}
