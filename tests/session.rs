// End-to-end session flow: load a document from disk, search it, sort the
// results, persist the session, and restore it into a fresh state.

use std::fs;

use serde_json::json;

use jsonpick::{
    file, sort_results, AppState, ResultSort, SortColumn, SortDirection, Storage,
};

const THEME: &str = r##"{
    "colors": {
        "primary": "#aabbcc",
        "muted": "#ddeeff"
    },
    "spacing": {
        "item2": "8px",
        "item10": "40px",
        "item1": "4px"
    },
    "version": 3
}"##;

#[test]
fn load_search_sort_persist_restore() {
    let dir = tempfile::tempdir().unwrap();
    let doc_path = dir.path().join("theme.json");
    fs::write(&doc_path, THEME).unwrap();

    let state = AppState::new();
    let document = file::open_file(&doc_path).unwrap();
    state.load_document(&document, "theme.json");

    // querying "spacing" surfaces the object and drags in its subtree
    state.set_query("spacing");
    let response = state.search();
    assert_eq!(response.suggestions[0].path, "spacing");
    let result_paths: Vec<&str> = response.results.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        result_paths,
        vec!["spacing", "spacing.item2", "spacing.item10", "spacing.item1"]
    );

    // primitive results sorted by value put the magnitudes in order
    let primitives: Vec<_> = response
        .results
        .iter()
        .filter(|e| !e.is_structured())
        .cloned()
        .collect();
    let sorted = sort_results(
        &primitives,
        Some(&ResultSort {
            column: SortColumn::Value,
            direction: SortDirection::Asc,
        }),
    );
    let sorted_paths: Vec<&str> = sorted.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        sorted_paths,
        vec!["spacing.item1", "spacing.item2", "spacing.item10"]
    );

    // persist, restore into a fresh state, and get identical search output
    let storage = Storage::new(dir.path().join("config"));
    storage.save_session(&state).unwrap();
    storage.save_dark_mode(true).unwrap();

    let restored = AppState::new();
    assert!(storage.restore_session(&restored).unwrap());
    assert_eq!(restored.file_name().as_deref(), Some("theme.json"));
    restored.set_query("spacing");
    assert_eq!(restored.search(), {
        state.set_query("spacing");
        state.search()
    });
    assert_eq!(storage.load_dark_mode().unwrap(), Some(true));
}

#[test]
fn failed_load_keeps_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("broken.json");
    fs::write(&bad_path, "{broken").unwrap();

    let state = AppState::new();
    state.load_document(&json!({"kept": true}), "kept.json");

    let err = file::open_file(&bad_path).unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON file");
    // the parse failure never reached the state; the old entries survive
    assert_eq!(state.entries().unwrap().len(), 1);
    assert_eq!(state.file_name().as_deref(), Some("kept.json"));
}
