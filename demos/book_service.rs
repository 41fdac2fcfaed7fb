//! Book service walkthrough: storage -> service -> presentation.
//!
//! The primary repository talks to a database that refuses connections, the
//! secondary one decodes a truncated JSON document. The service layer puts
//! them behind a fallback chain and re-wraps failures with a curated client
//! message. The console only ever shows client text; the internal chain goes
//! to stderr as a diagnostic report.
//!
//! Run with `RUST_LOG=debug cargo run --example book_service --features json`.

use std::io;

use tracing_subscriber::EnvFilter;

use layer_rail::batch::BatchRunner;
use layer_rail::compose::{guard, Fallback};
use layer_rail::present::{OutcomePresenter, RenderDecision};
use layer_rail::sources::JsonSource;
use layer_rail::traits::{Classify, Source};
use layer_rail::{context, ErrorContext, LayeredError, Outcome};

const RAW_BOOKS: &str = r#"["Book 1", "Book 2""#;

/// Stand-in for a relational database client.
struct DbBookRepository {
    url: &'static str,
}

impl DbBookRepository {
    fn connect(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, format!("{} refused the connection", self.url)))
    }
}

impl Source<str> for DbBookRepository {
    type Output = String;

    fn fetch(&self, id: &str) -> Outcome<String> {
        self.connect()
            .classify_with(|err| {
                LayeredError::source("db-books", "SELECT NAME FROM BOOK WHERE ID = ? failed")
                    .with_context(ErrorContext::metadata("book_id", id.to_string()))
                    .caused_by_opaque(err)
            })
            .map(|()| format!("DDD-{id}"))
    }

    fn name(&self) -> &str {
        "db-books"
    }
}

struct BookService<S> {
    books: S,
}

impl<S: Source<str, Output = String>> BookService<S> {
    fn book_by_id(&self, id: &str) -> Outcome<String> {
        self.books.fetch(id).map_failure(|err| {
            LayeredError::service("book-service", format!("error when get book by {id}"))
                .with_client_message("Error when get book, please try later")
                .with_context(context!("book_id={}", id))
                .caused_by(err)
        })
    }
}

impl<S: Source<str, Output = String>> Source<String> for BookService<S> {
    type Output = String;

    fn fetch(&self, id: &String) -> Outcome<String> {
        self.book_by_id(id)
    }

    fn name(&self) -> &str {
        "book-service"
    }
}

fn render(presenter: &OutcomePresenter, outcome: Outcome<String>) {
    if let Some(err) = outcome.failure_ref() {
        eprintln!("diagnostic: {}", presenter.diagnostic_report(err));
    }
    let decision = presenter.present(outcome);
    match &decision {
        RenderDecision::Show(book) => println!("book: {book}"),
        _ => println!("error: {}", presenter.user_text(&decision).unwrap_or_default()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let json = JsonSource::new("json-books", RAW_BOOKS, |all: Vec<String>, id: &str| {
        all.into_iter().find(|title| title == id)
    });

    let repository = Fallback::new("book-repository")
        .with_source(guard(DbBookRepository { url: "postgres://db-primary:5432/books" }))
        .with_source(json);

    let service = BookService { books: repository };
    let presenter = OutcomePresenter::new();

    println!("-- single lookup");
    render(&presenter, service.book_by_id("123"));

    println!("-- fail-fast batch");
    let runner = BatchRunner::new(&service);
    let ids = ["1", "2", "3", "4"];
    let all = runner.fail_fast(ids.iter().map(|id| id.to_string()));
    render(&presenter, all.map(|books| books.join(", ")));

    println!("-- collect-all batch");
    let batch = runner.collect_all(ids.iter().map(|id| id.to_string()));
    for (id, outcome) in batch {
        print!("{id}: ");
        render(&presenter, outcome);
    }
}
