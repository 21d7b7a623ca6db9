use std::collections::HashSet;

use crate::types::{value_text, Entry, SearchResponse};

// The match engine. Pure function of its three inputs: it holds no state
// between calls and is recomputed in full on every query or selection change.
pub fn search(entries: &[Entry], query: &str, active_suggestion: Option<usize>) -> SearchResponse {
    if query.is_empty() || entries.is_empty() {
        return SearchResponse::empty();
    }
    let words = query_words(query);

    let mut suggestions: Vec<Entry> = entries
        .iter()
        .filter(|entry| entry_matches(entry, &words))
        .cloned()
        .collect();
    // shortest path first; sort_by_key is stable so ties keep document order
    suggestions.sort_by_key(|entry| entry.path.len());

    let prediction = suggestions
        .first()
        .map(|top| predict_suffix(&top.path, query))
        .unwrap_or_default();

    // An in-range selection narrows the results to that entry's subtree; any
    // out-of-range index degrades to the unselected computation.
    let results = match active_suggestion.and_then(|index| suggestions.get(index)) {
        Some(selected) => subtree_results(entries, selected),
        None => unselected_results(entries, query, &words),
    };

    SearchResponse {
        suggestions,
        results,
        prediction,
    }
}

// Lowercase, dots become spaces, then split on whitespace runs. A query of
// only dots/whitespace produces no words, which matches every entry.
fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .replace('.', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// AND-of-substrings: every word must appear somewhere in the normalized path
// or in the value's text form. Word order is irrelevant.
fn entry_matches(entry: &Entry, words: &[String]) -> bool {
    let path = entry.path.to_lowercase().replace('.', " ");
    let value = value_text(&entry.value).to_lowercase();
    words
        .iter()
        .all(|word| path.contains(word.as_str()) || value.contains(word.as_str()))
}

// The completion is only meaningful when the query is literally a prefix of
// the top suggestion's path; a bare positional slice would hand back a
// mid-string fragment, so an explicit prefix check gates it.
fn predict_suffix(path: &str, query: &str) -> String {
    if path.len() < query.len() || !path.is_char_boundary(query.len()) {
        return String::new();
    }
    let (head, tail) = path.split_at(query.len());
    if head.eq_ignore_ascii_case(query) {
        tail.to_string()
    } else {
        String::new()
    }
}

// Selecting a suggestion reveals it together with its full flattened subtree,
// in document order.
fn subtree_results(entries: &[Entry], selected: &Entry) -> Vec<Entry> {
    let prefix = format!("{}.", selected.path);
    let mut results = vec![selected.clone()];
    results.extend(
        entries
            .iter()
            .filter(|entry| entry.path.starts_with(&prefix))
            .cloned(),
    );
    results
}

fn unselected_results(entries: &[Entry], query: &str, words: &[String]) -> Vec<Entry> {
    // Exact value matches win outright and suppress the word match entirely.
    let needle = query.to_lowercase();
    let exact: Vec<Entry> = entries
        .iter()
        .filter(|entry| value_text(&entry.value).to_lowercase() == needle)
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let mut results: Vec<Entry> = entries
        .iter()
        .filter(|entry| entry_matches(entry, words))
        .cloned()
        .collect();

    // Structured matches drag their flattened descendants into the result
    // set, appended in document order and deduplicated by path.
    let mut seen: HashSet<String> = results.iter().map(|entry| entry.path.clone()).collect();
    let prefixes: Vec<String> = results
        .iter()
        .filter(|entry| entry.is_structured())
        .map(|entry| format!("{}.", entry.path))
        .collect();
    for prefix in prefixes {
        for entry in entries {
            if entry.path.starts_with(&prefix) && seen.insert(entry.path.clone()) {
                results.push(entry.clone());
            }
        }
    }
    results
}
