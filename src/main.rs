//! Command-line shell around the search core.
//!
//! Runs one search against a local JSON catalog and prints the result page.
//! Arguments are `key=value` pairs:
//!
//! ```text
//! get-my-books catalog=books.json query=rust min=10000 max=30000 order=lowPrice more=1
//! ```
//!
//! # Keys
//!
//! Configuration (see `Config::from_map`), or `config=<file.toml>` to load it
//! from a file instead:
//! - `catalog`: path of the JSON catalog (array of books)
//! - `page_size`, `max_pages`, `trace_level`
//!
//! Search input, translated to store events in this order:
//! - `query` → raw search-box text (`SetQuery` or `ResetState`)
//! - `min` / `max` → `SetPrice` (either side may be omitted)
//! - `order` → `SortBooks` (`default`, `lowPrice`, `highPrice`, `titleAsc`, `titleDesc`)
//! - `more` → that many `LoadMoreBooks`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::process::ExitCode;

use get_my_books::fetch::{run_actions, CatalogSource};
use get_my_books::observability::init_tracing;
use get_my_books::{initialize, ui, Config, Event, GetMyBooksError, PriceRange, Result, SortOrder};

fn main() -> ExitCode {
    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<()> {
    let options = parse_args(args)?;

    let config = match options.get("config") {
        Some(path) => Config::from_file(get_my_books::infrastructure::expand_tilde(path))?,
        None => Config::from_map(&options),
    };
    init_tracing(&config);

    search(&options, &config).map_err(|e| {
        tracing::error!(error = %e, "search failed");
        e
    })
}

fn search(options: &BTreeMap<String, String>, config: &Config) -> Result<()> {
    let catalog = config
        .catalog_path()
        .ok_or_else(|| GetMyBooksError::Config("no catalog given (catalog=<file.json>)".to_string()))?;
    let source = CatalogSource::from_file(catalog)?;

    let mut store = initialize(config);

    let (_, actions) = store.submit_query(options.get("query").map_or("", String::as_str));
    run_actions(&mut store, &source, actions, config.max_pages);

    let min = parse_price(options, "min")?;
    let max = parse_price(options, "max")?;
    if min.is_some() || max.is_some() {
        store.dispatch(Event::SetPrice(PriceRange::new(min, max)));
    }

    if let Some(order) = options.get("order") {
        store.dispatch(Event::SortBooks(order.parse::<SortOrder>()?));
    }

    let more = options
        .get("more")
        .map(|n| n.trim().parse::<u32>())
        .transpose()
        .map_err(|e| GetMyBooksError::Config(format!("invalid more: {e}")))?
        .unwrap_or(0);
    for _ in 0..more {
        store.dispatch(Event::LoadMoreBooks);
    }

    ui::render(&store);
    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<BTreeMap<String, String>> {
    args.map(|arg| {
        arg.split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            .ok_or_else(|| GetMyBooksError::Config(format!("expected key=value, got {arg:?}")))
    })
    .collect()
}

fn parse_price(options: &BTreeMap<String, String>, key: &str) -> Result<Option<i64>> {
    options
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|e| GetMyBooksError::Config(format!("invalid {key}: {e}")))
        })
        .transpose()
}
