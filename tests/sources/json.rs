use crate::support::{calls, Counting};
use layer_rail::compose::Fallback;
use layer_rail::present::{OutcomePresenter, RenderDecision};
use layer_rail::sources::JsonSource;
use layer_rail::traits::Source;
use layer_rail::{ErrorContext, FailureKind};
use serde::Deserialize;

const TRUNCATED: &str = r#"["Book 1", "Book 2""#;

fn titles(raw: &'static str) -> JsonSource<Vec<String>, impl Fn(Vec<String>, &str) -> Option<String>> {
    JsonSource::new("json-books", raw, |all: Vec<String>, id: &str| all.into_iter().find(|t| t == id))
}

#[test]
fn decodes_and_selects() {
    let books = titles(r#"["Book 1", "Book 2"]"#);
    assert_eq!(books.fetch("Book 1").into_success().as_deref(), Some("Book 1"));
    assert_eq!(books.name(), "json-books");
}

#[test]
fn truncated_document_is_a_source_failure() {
    let err = titles(TRUNCATED).fetch("Book 1").into_failure().unwrap();

    assert_eq!(err.kind(), FailureKind::Source);
    assert_eq!(err.layer(), "json-books");
    assert!(err.context().contains(&ErrorContext::metadata("line", "1")));
    let cause = err.cause().unwrap().as_error();
    assert!(cause.downcast_ref::<serde_json::Error>().unwrap().is_eof());
}

#[test]
fn missing_entry_is_a_source_failure() {
    let err = titles(r#"["Book 1"]"#).fetch("Book 9").into_failure().unwrap();

    assert_eq!(err.kind(), FailureKind::Source);
    assert!(err.cause().is_none());
    assert!(err.internal_message().contains("no entry"));
}

#[derive(Debug, Deserialize)]
struct Catalog {
    books: Vec<Book>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Book {
    id: u32,
    name: String,
}

#[test]
fn structured_documents_decode_into_user_types() {
    let raw = r#"{"books": [{"id": 1, "name": "Book 1"}, {"id": 2, "name": "Book 2"}]}"#;
    let catalog = JsonSource::new("json-catalog", raw, |catalog: Catalog, id: &u32| {
        catalog.books.into_iter().find(|book| book.id == *id)
    });

    let book = catalog.fetch(&2u32).into_success().unwrap();
    assert_eq!(book, Book { id: 2, name: "Book 2".into() });
}

#[test]
fn book_service_falls_back_and_presents_try_later() {
    let (db, db_calls) = Counting::failing("db-books");
    let repository = Fallback::new("book-repository")
        .with_source(db)
        .with_source(titles(TRUNCATED).with_client_message("Books file is damaged"));

    let outcome = repository.fetch("Book 1").map_failure(|err| {
        layer_rail::LayeredError::service("book-service", "error when get books")
            .with_client_message("Error when get books, please try later")
            .caused_by(err)
    });

    let err = outcome.failure_ref().unwrap();
    let layers: Vec<&str> = err.chain().filter_map(|link| link.as_layered()).map(|e| e.layer()).collect();
    assert_eq!(layers, vec!["book-service", "book-repository", "json-books"]);
    assert_eq!(calls(&db_calls), 1);

    let decision = OutcomePresenter::new().present(outcome);
    assert_eq!(decision, RenderDecision::ShowUserMessage("Error when get books, please try later".into()));
}

#[test]
fn inner_client_message_surfaces_without_service_override() {
    let repository = Fallback::new("book-repository")
        .with_source(titles(TRUNCATED).with_client_message("Books file is damaged"));

    let decision = OutcomePresenter::new().present(repository.fetch("Book 1"));
    assert_eq!(decision, RenderDecision::ShowUserMessage("Books file is damaged".into()));
}
