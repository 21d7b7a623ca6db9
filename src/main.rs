use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsonpick::{
    file, pick, sort_object_view, sort_results, value_text, AppState, ObjectSort, ResultSort,
    SortColumn, SortDirection, Storage,
};

#[derive(Parser)]
#[command(name = "jsonpick", version, about = "Search flattened JSON properties")]
struct Cli {
    /// JSON document to load
    file: PathBuf,

    /// Search text; omitted lists the top-level properties
    query: Option<String>,

    /// How the keys of object results are ordered
    #[arg(long, value_enum, default_value = "as-is")]
    object_sort: ObjectSort,

    /// Sort the primitive result table by this column
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Reverse the result table sort
    #[arg(long)]
    desc: bool,

    /// Maximum number of suggestions to print
    #[arg(long, default_value_t = 8)]
    suggestions: usize,

    /// Copy the top suggestion's path to the clipboard
    #[arg(long)]
    copy: bool,

    /// Persist the loaded session to the user config directory
    #[arg(long)]
    persist: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> jsonpick::Result<()> {
    let document = file::open_file(&cli.file)?;
    let state = AppState::new();
    state.load_document(&document, cli.file.display().to_string());

    if cli.persist {
        Storage::default_dir()?.save_session(&state)?;
    }

    let Some(query) = cli.query else {
        // no query: list the top-level properties and stop
        if let Some(entries) = state.entries() {
            for entry in entries.iter().filter(|e| !e.path.contains('.')) {
                println!("{}", entry.path);
            }
        }
        return Ok(());
    };

    state.set_query(query);
    let response = state.search();

    if !response.prediction.is_empty() {
        println!("prediction: {}{}", state.query(), response.prediction);
    }

    if !response.suggestions.is_empty() {
        println!("suggestions:");
        for entry in response.suggestions.iter().take(cli.suggestions) {
            let text = value_text(&entry.value);
            if !entry.is_structured() && text.len() < 20 {
                println!("  {} = {}", entry.path, text);
            } else {
                println!("  {}", entry.path);
            }
        }
    }

    let table_sort = cli.sort.map(|column| ResultSort {
        column,
        direction: if cli.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    });
    let sorted = sort_results(&response.results, table_sort.as_ref());

    // objects panel
    for entry in sorted.iter().filter(|e| e.is_structured()) {
        let view = sort_object_view(&entry.value, cli.object_sort);
        let pretty = serde_json::to_string_pretty(&view).unwrap_or_else(|_| view.to_string());
        println!("{}:\n{pretty}", entry.path);
    }
    // primitives panel
    for entry in sorted.iter().filter(|e| !e.is_structured()) {
        println!("{}: {}", entry.path, value_text(&entry.value));
    }

    if cli.copy {
        if let Some(top) = response.suggestions.first() {
            let picked = state.select_entry(top);
            pick::copy_path(&picked.path)?;
            println!("{}", picked.notification);
        }
    }

    Ok(())
}
