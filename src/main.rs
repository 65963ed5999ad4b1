//! sitesearch: preview how a result set renders in the dropdown.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use sitesearch::logging::{self, Verbosity};
use sitesearch::result::parse_results;
use sitesearch::{Config, MemoryHost, Options, Position, SearchResult, SiteSearch};
use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(about = "Render site search results as a grouped dropdown", long_about = None)]
struct Args {
    /// JSON file holding an array of results
    #[arg(value_name = "RESULTS")]
    results: PathBuf,

    /// Query typed into the input
    #[arg(long, short = 's', default_value = "")]
    query: String,

    /// Keys pressed after the results appear, e.g. ArrowDown,Enter
    #[arg(long, short = 'k', value_delimiter = ',')]
    keys: Vec<String>,

    /// Prefix for generated ids and classes
    #[arg(long)]
    base_class: Option<String>,

    /// Highlight the first result when results arrive
    #[arg(long)]
    auto_select: bool,

    /// Side of the input the panel opens towards
    #[arg(long, value_enum, default_value_t = Side::Below)]
    position: Side,

    /// Load configuration from this file instead of sitesearch.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Errors only on stderr
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Above,
    Below,
}

impl From<Side> for Position {
    fn from(side: Side) -> Self {
        match side {
            Side::Above => Self::Above,
            Side::Below => Self::Below,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Case-insensitive substring match on title and breadcrumb. Ranking is the backend's job, so
/// the file order is kept.
fn matches(result: &SearchResult, query: &str) -> bool {
    query.is_empty()
        || result.title.to_lowercase().contains(query)
        || result
            .hierarchy
            .iter()
            .any(|name| name.to_lowercase().contains(query))
}

fn run(args: Args) -> sitesearch::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(),
    };

    // Override config with command line args
    if let Some(base_class) = args.base_class {
        cfg.base_class = base_class;
    }
    if args.auto_select {
        cfg.auto_select = true;
    }

    let corpus = parse_results(&std::fs::read_to_string(&args.results)?)?;
    tracing::debug!(results = corpus.len(), "loaded results");

    let submitted: Rc<RefCell<Option<SearchResult>>> = Rc::default();
    let sink = Rc::clone(&submitted);
    let options = Options::default()
        .config(cfg)
        .on_submit(move |result: &SearchResult| *sink.borrow_mut() = Some(result.clone()));

    let search = move |query: &str| {
        let query = query.to_lowercase();
        corpus
            .iter()
            .filter(|result| matches(result, &query))
            .cloned()
            .collect::<Vec<_>>()
    };

    let host = MemoryHost::new().with_position(args.position.into());
    let mut dropdown = SiteSearch::with_search(host, search, options)?;

    dropdown.host_mut().type_text(&args.query);
    dropdown.handle_input(Instant::now());
    if let Some(deadline) = dropdown.next_deadline() {
        dropdown.poll(deadline);
    }

    for key in &args.keys {
        let outcome = dropdown.handle_key_down(key);
        tracing::info!(%key, ?outcome, "key pressed");
    }

    for fragment in dropdown.host().results() {
        println!("{fragment}");
    }

    if let Some(result) = submitted.borrow().as_ref() {
        let json = serde_json::to_string_pretty(result)?;
        println!("{json}");
    }

    Ok(())
}
