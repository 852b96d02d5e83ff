use std::fs;
use std::path::{Path, PathBuf};

use wholesale_catalog::data::error::{FetchError, ParseError, StrategyError};
use wholesale_catalog::data::filter::{FilterCriteria, apply};
use wholesale_catalog::data::loader::{
    BufferedRetrieval, CatalogLoader, ResourceLocation, RetrievalStrategy, StreamingRetrieval,
    spawn_load,
};
use wholesale_catalog::state::CatalogState;

fn bundled_csv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("csv/Wholesale Products - Sheet.csv")
}

fn write_fixture(dir: &Path, text: &str) -> ResourceLocation {
    let path = dir.join("catalog.csv");
    fs::write(&path, text).unwrap();
    ResourceLocation::File(path)
}

#[test]
fn loads_bundled_catalog() {
    let catalog = CatalogLoader::standard()
        .load(&ResourceLocation::File(bundled_csv()))
        .unwrap();

    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.category_facet()[0], "Formaggi");
    assert_eq!(catalog.category_facet().len(), 9);
    assert!(catalog.customer_facet().contains(&"Restaurants, Bars".to_string()));
    assert_eq!(catalog.records[1].description, "Stretched-curd cheese, \"pear\" shape");
    assert_eq!(catalog.records[9].price, "");
}

#[test]
fn both_strategies_agree() {
    let dir = tempfile::tempdir().unwrap();
    let location = write_fixture(
        dir.path(),
        "Name,Category,Code\nPecorino,Formaggi,PC1\n\nSalame,Salumi,SL1\n",
    );

    let streamed = StreamingRetrieval.retrieve(&location).unwrap();
    let buffered = BufferedRetrieval.retrieve(&location).unwrap();
    assert_eq!(streamed, buffered);
    assert_eq!(streamed.len(), 2);
}

#[test]
fn missing_file_fails_both_strategies() {
    let dir = tempfile::tempdir().unwrap();
    let location = ResourceLocation::File(dir.path().join("nope.csv"));

    let err = CatalogLoader::standard().load(&location).unwrap_err();
    assert!(matches!(err.primary, StrategyError::Fetch(FetchError::File { .. })));
    assert!(matches!(err.fallback, StrategyError::Fetch(FetchError::File { .. })));
}

#[test]
fn malformed_file_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let location = write_fixture(dir.path(), "Name,Price\n\"Unterminated,10");

    let err = CatalogLoader::standard().load(&location).unwrap_err();
    assert!(matches!(
        err.fallback,
        StrategyError::Parse(ParseError::UnterminatedQuote { line: 2 })
    ));

    let mut state = CatalogState::default();
    state.begin_load(location.to_string());
    state.finish_load(Err(err));
    assert!(!state.is_loading());
    assert!(state.all_records().is_empty());
    assert!(state.category_facet().is_empty());
}

#[test]
fn refused_connection_is_a_fetch_error() {
    // Port 1 on loopback is not expected to be listening.
    let location = ResourceLocation::resolve("http://127.0.0.1:1", "catalog.csv").unwrap();
    let err = CatalogLoader::standard().load(&location).unwrap_err();
    assert!(matches!(err.primary, StrategyError::Fetch(FetchError::Http { .. })));
    assert!(matches!(err.fallback, StrategyError::Fetch(FetchError::Http { .. })));
}

#[test]
fn background_load_delivers_one_result() {
    let (done_tx, done_rx) = std::sync::mpsc::channel();
    let rx = spawn_load(
        CatalogLoader::standard(),
        ResourceLocation::File(bundled_csv()),
        move || done_tx.send(()).unwrap(),
    );

    let catalog = rx.recv().unwrap().unwrap();
    done_rx.recv().unwrap();
    assert_eq!(catalog.len(), 10);
    assert!(rx.recv().is_err());
}

#[test]
fn filters_over_loaded_catalog() {
    let catalog = CatalogLoader::standard()
        .load(&ResourceLocation::File(bundled_csv()))
        .unwrap();

    let cheeses = apply(
        &catalog.records,
        &FilterCriteria {
            category: "Formaggi".into(),
            ..Default::default()
        },
    );
    assert_eq!(cheeses.len(), 2);

    let bars = apply(
        &catalog.records,
        &FilterCriteria {
            target_customer: "Restaurants, Bars".into(),
            search_term: "GENZ".into(),
            ..Default::default()
        },
    );
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].code, "SPI-005");
}
