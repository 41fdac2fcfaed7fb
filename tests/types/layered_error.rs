use layer_rail::{ChainLink, ErrorContext, FailureKind, LayeredError};
use std::error::Error;
use std::io;

fn three_layers() -> LayeredError {
    let db = LayeredError::source("db-books", "SELECT NAME FROM BOOK failed")
        .caused_by_opaque(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
    let repo = LayeredError::exhausted("book-repository", db);
    LayeredError::service("book-service", "error when get books").caused_by(repo)
}

#[test]
fn source_error_has_no_client_message_by_default() {
    let err = LayeredError::source("json-books", "unexpected end of input");

    assert_eq!(err.kind(), FailureKind::Source);
    assert_eq!(err.layer(), "json-books");
    assert_eq!(err.internal_message(), "unexpected end of input");
    assert_eq!(err.client_message(), None);
    assert_eq!(err.effective_client_message(), None);
    assert!(err.cause().is_none());
}

#[test]
fn chain_walks_from_outermost_to_root() {
    let err = three_layers();

    let layers: Vec<Option<&str>> =
        err.chain().map(|link| link.as_layered().map(LayeredError::layer)).collect();
    assert_eq!(layers, vec![Some("book-service"), Some("book-repository"), Some("db-books"), None]);
    assert_eq!(err.depth(), 4);
}

#[test]
fn root_cause_is_the_opaque_error() {
    let err = three_layers();

    match err.root_cause() {
        ChainLink::Opaque(inner) => assert_eq!(inner.to_string(), "connection refused"),
        ChainLink::Layered(layered) => panic!("expected opaque root, got {layered}"),
    }
}

#[test]
fn root_cause_of_single_error_is_itself() {
    let err = LayeredError::source("db", "boom");
    assert_eq!(err.root_cause().as_layered(), Some(&err));
}

#[test]
fn std_error_source_follows_the_chain() {
    let err = three_layers();

    let repo = err.source().unwrap();
    assert_eq!(repo.to_string(), "[book-repository] all sources failed, last failure from `db-books`");
    let db = repo.source().unwrap();
    assert_eq!(db.to_string(), "[db-books] SELECT NAME FROM BOOK failed");
    assert_eq!(db.source().unwrap().to_string(), "connection refused");
}

#[test]
fn exhausted_keeps_last_failure_as_cause() {
    let last = LayeredError::source("json-books", "truncated document");
    let err = LayeredError::exhausted("book-repository", last.clone());

    assert_eq!(err.kind(), FailureKind::SourcesExhausted);
    assert!(err.kind().is_composition());
    assert_eq!(err.cause().and_then(|c| c.as_layered()), Some(&last));
}

#[test]
fn no_sources_has_no_cause() {
    let err = LayeredError::no_sources("book-repository");

    assert_eq!(err.kind(), FailureKind::NoSources);
    assert_eq!(err.internal_message(), "no sources configured");
    assert!(err.cause().is_none());
}

#[test]
fn outer_client_message_overrides_inner() {
    let inner = LayeredError::source("db-books", "timeout").with_client_message("Database is slow");
    let outer = LayeredError::service("book-service", "could not load")
        .with_client_message("Error when get books, please try later")
        .caused_by(inner);

    assert_eq!(outer.effective_client_message(), Some("Error when get books, please try later"));
    // the inner text is still reachable
    let inner_text = outer.cause().and_then(|c| c.as_layered()).and_then(LayeredError::client_message);
    assert_eq!(inner_text, Some("Database is slow"));
}

#[test]
fn inner_client_message_surfaces_when_outer_has_none() {
    let inner = LayeredError::source("db-books", "timeout").with_client_message("Database is slow");
    let outer = LayeredError::service("book-service", "could not load").caused_by(inner);

    assert_eq!(outer.client_message(), None);
    assert_eq!(outer.effective_client_message(), Some("Database is slow"));
}

#[test]
fn display_never_shows_client_message() {
    let err = LayeredError::service("book-service", "db password rejected")
        .with_client_message("please try later");

    assert_eq!(err.to_string(), "[book-service] db password rejected");
}

#[test]
fn contexts_keep_insertion_order() {
    let err = LayeredError::source("db", "boom")
        .with_context("first")
        .with_context(ErrorContext::tag("db"))
        .with_context(ErrorContext::metadata("book_id", "7"));

    let rendered: Vec<String> = err.context().iter().map(ErrorContext::message).collect();
    assert_eq!(rendered, vec!["first", "[db]", "book_id=7"]);
}

#[test]
fn failure_kind_renders_kebab_case() {
    assert_eq!(FailureKind::SourcesExhausted.to_string(), "sources-exhausted");
    assert_eq!(FailureKind::NoSources.as_str(), "no-sources");
    assert!(!FailureKind::Service.is_composition());
}

#[test]
fn clones_compare_equal_including_opaque_cause() {
    let err = three_layers();
    assert_eq!(err.clone(), err);
}

#[test]
fn report_captures_every_link() {
    let report = three_layers().report();

    assert_eq!(report.links.len(), 4);
    assert_eq!(report.links[0].kind, Some(FailureKind::Service));
    assert_eq!(report.links[2].layer.as_deref(), Some("db-books"));
    assert_eq!(report.links[3].kind, None);
    assert_eq!(report.root_message(), Some("connection refused"));
}

#[derive(Debug)]
struct DriverError(LayeredError);

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("driver error")
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn layered_error_behind_opaque_cause_is_recognised() {
    let inner = LayeredError::source("cache", "miss");
    let err = LayeredError::source("db", "fallback read failed").caused_by_opaque(DriverError(inner));

    let layers: Vec<Option<&str>> =
        err.chain().map(|link| link.as_layered().map(LayeredError::layer)).collect();
    assert_eq!(layers, vec![Some("db"), None, Some("cache")]);
}
