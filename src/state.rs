use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::flatten::flatten;
use crate::pick::Pick;
use crate::types::{Entry, SearchResponse};

// Session state for one loaded document. The entry set is replaced wholesale
// on load/restore and only ever read by the engine and the sorters; query and
// selection carry the keyboard contract (a query change always clears the
// selection, selection moves clamp and never wrap).
pub struct AppState {
    entries: RwLock<Option<Arc<Vec<Entry>>>>,
    file_name: RwLock<Option<String>>,
    query: RwLock<String>,
    active_suggestion: RwLock<Option<usize>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: RwLock::new(None),
            file_name: RwLock::new(None),
            query: RwLock::new(String::new()),
            active_suggestion: RwLock::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_document(&self, document: &Value, file_name: impl Into<String>) {
        let entries = flatten(document);
        tracing::debug!(count = entries.len(), "document flattened");
        *self.entries.write() = Some(Arc::new(entries));
        *self.file_name.write() = Some(file_name.into());
        *self.query.write() = String::new();
        *self.active_suggestion.write() = None;
    }

    // Feed the engine an already flattened entry set, e.g. from a persisted
    // snapshot. Indistinguishable from a fresh load afterwards.
    pub fn restore(&self, entries: Vec<Entry>, file_name: Option<String>) {
        tracing::debug!(count = entries.len(), "session restored");
        *self.entries.write() = Some(Arc::new(entries));
        *self.file_name.write() = file_name;
        *self.query.write() = String::new();
        *self.active_suggestion.write() = None;
    }

    pub fn clear(&self) {
        *self.entries.write() = None;
        *self.file_name.write() = None;
        *self.query.write() = String::new();
        *self.active_suggestion.write() = None;
    }

    pub fn entries(&self) -> Option<Arc<Vec<Entry>>> {
        self.entries.read().clone()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_name.read().clone()
    }

    pub fn query(&self) -> String {
        self.query.read().clone()
    }

    pub fn active_suggestion(&self) -> Option<usize> {
        *self.active_suggestion.read()
    }

    pub fn set_query(&self, text: impl Into<String>) {
        *self.query.write() = text.into();
        // a new keystroke always invalidates the previous selection
        *self.active_suggestion.write() = None;
    }

    pub fn select_next(&self) {
        let count = self.search().suggestions.len();
        if count == 0 {
            return;
        }
        let mut active = self.active_suggestion.write();
        *active = Some(match *active {
            None => 0,
            Some(index) => (index + 1).min(count - 1),
        });
    }

    pub fn select_prev(&self) {
        let mut active = self.active_suggestion.write();
        *active = match *active {
            None | Some(0) => None,
            Some(index) => Some(index - 1),
        };
    }

    // Append the inline completion to the query; counts as a query change.
    pub fn accept_prediction(&self) {
        let prediction = self.search().prediction;
        if prediction.is_empty() {
            return;
        }
        let current = self.query.read().clone();
        self.set_query(format!("{current}{prediction}"));
    }

    // Picking an entry puts its path into the query and hands the caller the
    // payload for the clipboard/notification collaborator.
    pub fn select_entry(&self, entry: &Entry) -> Pick {
        self.set_query(entry.path.clone());
        Pick::new(&entry.path)
    }

    pub fn search(&self) -> SearchResponse {
        let query = self.query.read().clone();
        let active = *self.active_suggestion.read();
        match &*self.entries.read() {
            Some(entries) => crate::search::search(entries, &query, active),
            None => SearchResponse::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_state() -> AppState {
        let state = AppState::new();
        state.load_document(
            &json!({"color": 1, "colors": {"primary": "#aabbcc"}}),
            "theme.json",
        );
        state
    }

    #[test]
    fn load_resets_query_and_selection() {
        let state = loaded_state();
        state.set_query("color");
        state.select_next();
        state.load_document(&json!({"x": 1}), "other.json");
        assert_eq!(state.query(), "");
        assert_eq!(state.active_suggestion(), None);
        assert_eq!(state.file_name().as_deref(), Some("other.json"));
        assert_eq!(state.entries().unwrap().len(), 1);
    }

    #[test]
    fn query_change_clears_selection() {
        let state = loaded_state();
        state.set_query("color");
        state.select_next();
        assert_eq!(state.active_suggestion(), Some(0));
        state.set_query("colo");
        assert_eq!(state.active_suggestion(), None);
    }

    #[test]
    fn selection_clamps_and_never_wraps() {
        let state = loaded_state();
        state.set_query("color");
        // suggestions: color, colors, colors.primary
        assert_eq!(state.search().suggestions.len(), 3);
        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.active_suggestion(), Some(2));
        state.select_prev();
        state.select_prev();
        assert_eq!(state.active_suggestion(), Some(0));
        state.select_prev();
        assert_eq!(state.active_suggestion(), None);
        state.select_prev();
        assert_eq!(state.active_suggestion(), None);
    }

    #[test]
    fn select_next_without_suggestions_is_a_no_op() {
        let state = loaded_state();
        state.set_query("zzz");
        state.select_next();
        assert_eq!(state.active_suggestion(), None);
    }

    #[test]
    fn accept_prediction_extends_query_and_resets_selection() {
        let state = loaded_state();
        state.set_query("colo");
        assert_eq!(state.search().prediction, "r");
        state.select_next();
        state.accept_prediction();
        assert_eq!(state.query(), "color");
        assert_eq!(state.active_suggestion(), None);
    }

    #[test]
    fn select_entry_sets_query_and_builds_pick() {
        let state = loaded_state();
        state.set_query("prim");
        // "prim" also hits the parent object through its value text, and the
        // shorter "colors" path sorts first; pick the leaf at index 1
        let entry = state.search().suggestions[1].clone();
        let pick = state.select_entry(&entry);
        assert_eq!(state.query(), "colors.primary");
        assert_eq!(pick.notification, "Picked! colors.primary");
        assert_eq!(state.active_suggestion(), None);
    }

    #[test]
    fn restore_matches_a_fresh_load() {
        let fresh = loaded_state();
        fresh.set_query("color");

        let restored = AppState::new();
        restored.restore(
            fresh.entries().unwrap().as_ref().clone(),
            Some("theme.json".into()),
        );
        restored.set_query("color");
        assert_eq!(fresh.search(), restored.search());
    }

    #[test]
    fn clear_empties_everything() {
        let state = loaded_state();
        state.set_query("color");
        state.clear();
        assert!(state.entries().is_none());
        assert!(state.file_name().is_none());
        assert_eq!(state.query(), "");
        assert_eq!(state.search(), SearchResponse::empty());
    }

    #[test]
    fn search_without_document_is_empty() {
        let state = AppState::new();
        state.set_query("anything");
        assert_eq!(state.search(), SearchResponse::empty());
    }
}
