//! Knowledge base loading and the precomputed normalized phrase index

use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::normalize::normalize;

/// Condition entry from the knowledge base
///
/// `core` phrases are high-specificity symptoms, `other` phrases supporting
/// signals, `red_flags` urgent-danger phrases for this condition. The `_norm`
/// lists are cached normalized copies, aligned 1:1 with their sources.
#[pyclass]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    #[serde(default)]
    pub core: Vec<String>,
    #[pyo3(get)]
    #[serde(default)]
    pub other: Vec<String>,
    #[pyo3(get)]
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[pyo3(get)]
    #[serde(default)]
    pub advice: String,
    #[pyo3(get)]
    #[serde(skip)]
    pub core_norm: Vec<String>,
    #[pyo3(get)]
    #[serde(skip)]
    pub other_norm: Vec<String>,
    #[pyo3(get)]
    #[serde(skip)]
    pub red_norm: Vec<String>,
}

#[pymethods]
impl Condition {
    fn __repr__(&self) -> String {
        format!("Condition(id='{}', name='{}', core={}, other={})",
                self.id, self.name, self.core.len(), self.other.len())
    }
}

/// The full loaded knowledge base: an immutable snapshot, queries only read it
#[pyclass]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[pyo3(get)]
    pub conditions: Vec<Condition>,
    #[pyo3(get)]
    #[serde(default)]
    pub global_red_flags: Vec<String>,
    #[pyo3(get)]
    #[serde(skip)]
    pub global_red_norm: Vec<String>,
}

#[pymethods]
impl KnowledgeBase {
    fn __repr__(&self) -> String {
        format!("KnowledgeBase(conditions={}, global_red_flags={})",
                self.conditions.len(), self.global_red_flags.len())
    }
}

impl KnowledgeBase {
    /// Parse a knowledge base from JSON and build its normalized index
    pub fn from_json(json: &str) -> Result<KnowledgeBase, String> {
        let mut kb: KnowledgeBase = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse knowledge base: {}", e))?;
        kb.build_norm_index();
        Ok(kb)
    }

    /// Normalize every phrase list once, up front, so the scoring hot path
    /// never re-normalizes the base
    fn build_norm_index(&mut self) {
        for c in &mut self.conditions {
            c.core_norm = c.core.iter().map(|p| normalize(p)).collect();
            c.other_norm = c.other.iter().map(|p| normalize(p)).collect();
            c.red_norm = c.red_flags.iter().map(|p| normalize(p)).collect();
        }
        self.global_red_norm = self.global_red_flags.iter().map(|p| normalize(p)).collect();
    }
}

/// Load and index a knowledge base file (kb.json)
pub fn load_kb(path: &str) -> Result<KnowledgeBase, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read knowledge base file: {}", e))?;
    KnowledgeBase::from_json(&json)
}

// ============= Python Binding =============

#[pyfunction]
#[pyo3(name = "load_kb")]
pub fn py_load_kb(path: &str) -> PyResult<KnowledgeBase> {
    load_kb(path)
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e))
}
