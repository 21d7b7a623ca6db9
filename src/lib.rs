// jsonpick: load a JSON document, flatten it into (path, value) entries, and
// search them interactively with autocomplete, inline prediction, and
// deterministic display sorting. The engine is a pure function of the entry
// set, the query, and the active suggestion; everything stateful lives in
// AppState and the Storage snapshot layer.

pub mod config;
pub mod error;
pub mod file;
pub mod flatten;
pub mod numeric;
pub mod pick;
pub mod search;
pub mod sort;
pub mod state;
pub mod types;

pub use config::Storage;
pub use error::{Error, Result};
pub use flatten::flatten;
pub use numeric::numeric_prefix;
pub use pick::{copy_path, Pick, NOTIFICATION_DURATION};
pub use search::search;
pub use sort::{sort_object_view, sort_results};
pub use state::AppState;
pub use types::{
    value_text, Entry, ObjectSort, ResultSort, SearchResponse, SortColumn, SortDirection,
};
