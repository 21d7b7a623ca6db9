use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::numeric::numeric_prefix;
use crate::types::{value_text, Entry, ObjectSort, ResultSort, SortColumn, SortDirection};

// Reorder the immediate keys of a single object for display. Non-objects
// (arrays included) pass through unchanged; nested values are never touched.
pub fn sort_object_view(value: &Value, mode: ObjectSort) -> Value {
    let Value::Object(map) = value else {
        return value.clone();
    };
    let mut entries: Vec<(String, Value)> = map
        .iter()
        .map(|(key, child)| (key.clone(), child.clone()))
        .collect();
    match mode {
        ObjectSort::AsIs => {}
        ObjectSort::KeyAsc => entries.sort_by(|a, b| a.0.cmp(&b.0)),
        ObjectSort::KeyDesc => entries.sort_by(|a, b| b.0.cmp(&a.0)),
        ObjectSort::KeySmart => entries.sort_by(|a, b| smart_key_cmp(&a.0, &b.0)),
        ObjectSort::ValueAsc => entries.sort_by(|a, b| value_cmp(&a.1, &b.1)),
        ObjectSort::ValueDesc => entries.sort_by(|a, b| value_cmp(&b.1, &a.1)),
    }
    Value::Object(entries.into_iter().collect::<Map<_, _>>())
}

// Reorder primitive results by path or value; None keeps engine output order.
pub fn sort_results(entries: &[Entry], sort: Option<&ResultSort>) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    let Some(spec) = sort else {
        return sorted;
    };
    sorted.sort_by(|a, b| {
        let ord = match spec.column {
            SortColumn::Path => a.path.cmp(&b.path),
            SortColumn::Value => result_value_cmp(&a.value, &b.value),
        };
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn trailing_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?)(\d+)$").unwrap())
}

// "item10" -> ("item", 10); keys without a trailing digit run count as 0,
// so item1 < item2 < item10 instead of lexicographic item10 < item2.
fn split_trailing_digits(key: &str) -> (&str, u64) {
    if let Some(caps) = trailing_digits_re().captures(key) {
        if let (Some(text), Some(digits)) = (caps.get(1), caps.get(2)) {
            let number = digits.as_str().parse().unwrap_or(u64::MAX);
            return (text.as_str(), number);
        }
    }
    (key, 0)
}

fn smart_key_cmp(a: &str, b: &str) -> Ordering {
    let (text_a, num_a) = split_trailing_digits(a);
    let (text_b, num_b) = split_trailing_digits(b);
    text_a.cmp(text_b).then_with(|| num_a.cmp(&num_b))
}

// Numeric magnitude first; equal extractions (the common case for plain text,
// both 0) fall back to comparing the string forms.
fn value_cmp(a: &Value, b: &Value) -> Ordering {
    let num_a = numeric_prefix(a);
    let num_b = numeric_prefix(b);
    match num_a.partial_cmp(&num_b) {
        Some(Ordering::Equal) | None => value_text(a).cmp(&value_text(b)),
        Some(ord) => ord,
    }
}

// Result-table value compare only goes numeric when both texts look numeric
// (optional minus then a digit); otherwise it is a plain string compare.
fn result_value_cmp(a: &Value, b: &Value) -> Ordering {
    let text_a = value_text(a);
    let text_b = value_text(b);
    if looks_numeric(&text_a) && looks_numeric(&text_b) {
        let num_a = numeric_prefix(a);
        let num_b = numeric_prefix(b);
        match num_a.partial_cmp(&num_b) {
            Some(Ordering::Equal) | None => text_a.cmp(&text_b),
            Some(ord) => ord,
        }
    } else {
        text_a.cmp(&text_b)
    }
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.chars().next().is_some_and(|c| c.is_ascii_digit())
}
