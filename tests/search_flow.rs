//! End-to-end search flows: configuration file, JSON catalog, store and view model.

use get_my_books::fetch::{run_actions, CatalogSource};
use get_my_books::ui::{render_to_string, ViewStatus};
use get_my_books::{initialize, Config, Event, GetMyBooksError, PriceRange, SortOrder};
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {"title": "Rust in Action", "price": 39000, "sale_price": 35100, "status": "정상판매", "authors": ["Tim McNamara"]},
    {"title": "Programming Rust", "price": 45000, "sale_price": -1, "status": "정상판매", "authors": ["Jim Blandy"]},
    {"title": "Rust Atomics and Locks", "price": 32000, "sale_price": 28800, "status": "정상판매", "authors": ["Mara Bos"]},
    {"title": "Hands-on Rust", "price": 30000, "sale_price": 0, "status": "절판", "authors": ["Herbert Wolverson"]},
    {"title": "Rust for Rustaceans", "price": 29000, "sale_price": 26100, "status": "정상판매", "authors": ["Jon Gjengset"]},
    {"title": "Learning Go", "price": 36000, "sale_price": 32400, "status": "정상판매", "authors": ["Jon Bodner"]}
]"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn titles(store: &get_my_books::SearchStore) -> Vec<String> {
    store
        .state()
        .filtered_books
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|b| b.title.clone())
        .collect()
}

#[test]
fn search_filter_sort_and_page() {
    let catalog = temp_file(CATALOG);
    let config_file = temp_file(&format!(
        "catalog_path = {:?}\npage_size = 2\n",
        catalog.path().display().to_string()
    ));

    let config = Config::from_file(config_file.path()).unwrap();
    assert_eq!(config.page_size, 2);
    assert_eq!(config.max_pages, 50);

    let source = CatalogSource::from_file(config.catalog_path().unwrap())
        .unwrap()
        .with_page_size(2);
    let mut store = initialize(&config);

    let (_, actions) = store.submit_query("  rust ");
    assert!(store.state().loading);
    assert!(run_actions(&mut store, &source, actions, config.max_pages));

    assert_eq!(store.state().query, "rust");
    assert_eq!(store.state().total_count(), Some(5));
    assert_eq!(store.state().page, Some(1));

    store.dispatch(Event::SortBooks(SortOrder::LowPrice));
    assert_eq!(
        titles(&store),
        vec![
            "Rust for Rustaceans",
            "Rust Atomics and Locks",
            "Rust in Action",
            "Programming Rust",
            "Hands-on Rust"
        ]
    );

    store.dispatch(Event::SetPrice(PriceRange::between(27000, 40000)));
    assert_eq!(titles(&store), vec!["Rust Atomics and Locks", "Rust in Action"]);

    store.dispatch(Event::SortBooks(SortOrder::HighPrice));
    assert_eq!(titles(&store), vec!["Rust in Action", "Rust Atomics and Locks"]);

    store.dispatch(Event::SetPrice(PriceRange::UNBOUNDED));
    store.dispatch(Event::SortBooks(SortOrder::Default));
    assert_eq!(titles(&store).len(), 5);
    assert_eq!(store.state().filtered_books, store.state().books);

    let vm = store.viewmodel();
    assert_eq!(vm.status, ViewStatus::Results);
    assert_eq!(vm.items.len(), 2);
    assert!(vm.has_more);

    store.dispatch(Event::LoadMoreBooks);
    store.dispatch(Event::LoadMoreBooks);
    let vm = store.viewmodel();
    assert_eq!(vm.items.len(), 5);
    assert!(!vm.has_more);

    let text = render_to_string(&vm);
    assert!(text.starts_with("\"rust\" 검색 결과 5건\n"));
    assert!(text.contains("[구매 불가]"));
}

#[test]
fn new_query_discards_previous_results() {
    let source = CatalogSource::from_file(temp_file(CATALOG).path()).unwrap();
    let mut store = initialize(&Config::default());

    let (_, actions) = store.submit_query("rust");
    run_actions(&mut store, &source, actions, 50);
    store.dispatch(Event::SetPrice(PriceRange::between(0, 30000)));
    store.dispatch(Event::SortBooks(SortOrder::TitleAsc));

    let (_, actions) = store.submit_query("go");
    assert!(store.state().books.is_none());
    assert_eq!(store.state().order, SortOrder::Default);
    assert!(store.state().price_range.is_unbounded());

    run_actions(&mut store, &source, actions, 50);
    assert_eq!(titles(&store), vec!["Learning Go"]);
}

#[test]
fn query_without_matches_shows_empty_view() {
    let source = CatalogSource::from_file(temp_file(CATALOG).path()).unwrap();
    let mut store = initialize(&Config::default());

    let (_, actions) = store.submit_query("haskell");
    run_actions(&mut store, &source, actions, 50);

    let vm = store.viewmodel();
    assert_eq!(vm.status, ViewStatus::Empty);
    assert_eq!(render_to_string(&vm), "\"haskell\" 검색 결과 0건\n");
}

#[test]
fn state_snapshot_serializes_for_the_ui() {
    let source = CatalogSource::from_file(temp_file(CATALOG).path()).unwrap();
    let mut store = initialize(&Config::default());
    let (_, actions) = store.submit_query("go");
    run_actions(&mut store, &source, actions, 50);
    store.dispatch(Event::SetPrice(PriceRange::new(Some(30000), None)));

    let snapshot = serde_json::to_value(store.state()).unwrap();
    assert_eq!(snapshot["query"], "go");
    assert_eq!(snapshot["page"], 1);
    assert_eq!(snapshot["order"], "default");
    assert_eq!(snapshot["priceRange"]["min"], 30000);
    assert!(snapshot["priceRange"]["max"].is_null());
    assert_eq!(snapshot["filteredBooks"][0]["title"], "Learning Go");
}

#[test]
fn invalid_config_files_are_rejected() {
    let zero = temp_file("page_size = 0\n");
    assert!(matches!(Config::from_file(zero.path()), Err(GetMyBooksError::Config(_))));

    let garbage = temp_file("page_size = \"ten\"\n");
    assert!(matches!(Config::from_file(garbage.path()), Err(GetMyBooksError::Toml(_))));

    let empty = temp_file("");
    assert_eq!(Config::from_file(empty.path()).unwrap(), Config::default());
}

#[test]
fn sort_order_parses_wire_names() {
    for order in SortOrder::ALL {
        assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
    }
    assert!(matches!("cheapest".parse::<SortOrder>(), Err(GetMyBooksError::Config(_))));
}
