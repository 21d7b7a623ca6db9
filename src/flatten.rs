use serde_json::Value;

use crate::types::Entry;

// Depth-first pre-order flattening: each key/value pair at every level of the
// document becomes one entry, and a container entry is immediately followed by
// the entries for its descendants. Key order follows the document (insertion
// order for objects, index order for arrays), so the sequence re-nests back
// into the original document.
pub fn flatten(document: &Value) -> Vec<Entry> {
    let mut entries = Vec::new();
    flatten_into(document, "", &mut entries);
    entries
}

fn flatten_into(value: &Value, parent: &str, out: &mut Vec<Entry>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join_path(parent, key);
                out.push(Entry::new(&path, child.clone()));
                flatten_into(child, &path, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let path = join_path(parent, &index.to_string());
                out.push(Entry::new(&path, child.clone()));
                flatten_into(child, &path, out);
            }
        }
        // Primitives terminate recursion; a primitive root yields no entries.
        _ => {}
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
