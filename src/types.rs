use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String, // dot-joined keys/indices, e.g. "a.b.0.c"
    pub value: Value, // primitive, or the full subtree for object/array nodes
}

impl Entry {
    pub fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }

    // Structured entries render as a JSON subtree and land in the objects
    // panel; everything else is a primitive result.
    pub fn is_structured(&self) -> bool {
        matches!(self.value, Value::Object(_) | Value::Array(_))
    }
}

// Total stringification used for exact matching, word matching and value
// sorting: strings drop their quotes, scalars use their display form,
// containers fall back to compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub suggestions: Vec<Entry>, // autocomplete dropdown, shortest path first
    pub results: Vec<Entry>,     // current answer set, before display sorting
    pub prediction: String,      // inline completion shown after the caret
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self {
            suggestions: vec![],
            results: vec![],
            prediction: String::new(),
        }
    }
}

// How the immediate children of a single structured entry are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ObjectSort {
    AsIs,
    KeyAsc,
    KeyDesc,
    KeySmart,
    ValueAsc,
    ValueDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Path,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

// Ordering applied to the primitive result table; absent means the match
// engine's output order is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSort {
    pub column: SortColumn,
    pub direction: SortDirection,
}
