use crate::traits::{Classify, Source};
use crate::types::{ErrorContext, LayeredError, Outcome};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// A decoding source over a raw JSON document.
///
/// Each `fetch` decodes the document into `D` with `serde_json` and hands it
/// to a selector together with the request. Both ways this can fail are
/// classified as [`FailureKind::Source`](crate::FailureKind::Source) errors
/// named after this source:
/// - a malformed document, with the `serde_json::Error` as the opaque cause
///   and the configured client message, if any,
/// - a selector that finds nothing for the request.
///
/// # Examples
///
/// ```
/// use layer_rail::sources::JsonSource;
/// use layer_rail::traits::Source;
///
/// let books = JsonSource::new("json-books", r#"["Book 1", "Book 2"]"#, |all: Vec<String>, id: &str| {
///     all.into_iter().find(|title| title == id)
/// });
/// assert_eq!(books.fetch("Book 2").into_success().as_deref(), Some("Book 2"));
/// assert!(books.fetch("Book 3").is_failure());
///
/// let truncated = JsonSource::new("json-books", r#"["Book 1", "Book 2""#, |all: Vec<String>, _: &str| {
///     Some(all)
/// })
/// .with_client_message("Books are unavailable, please try later");
///
/// let err = truncated.fetch("any").into_failure().unwrap();
/// assert_eq!(err.client_message(), Some("Books are unavailable, please try later"));
/// assert!(err.cause().is_some());
/// ```
pub struct JsonSource<D, F> {
    name: Cow<'static, str>,
    raw: Cow<'static, str>,
    client_message: Option<Cow<'static, str>>,
    select: F,
    document: PhantomData<fn() -> D>,
}

impl<D, F> JsonSource<D, F> {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        raw: impl Into<Cow<'static, str>>,
        select: F,
    ) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            client_message: None,
            select,
            document: PhantomData,
        }
    }

    /// Client message attached when the document cannot be decoded.
    pub fn with_client_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.client_message = Some(message.into());
        self
    }

    fn decode_error(&self, error: serde_json::Error) -> LayeredError {
        let err = LayeredError::source(self.name.clone(), "could not decode JSON document")
            .with_context(ErrorContext::metadata("line", error.line().to_string()))
            .with_context(ErrorContext::metadata("column", error.column().to_string()))
            .caused_by_opaque(error);
        match &self.client_message {
            Some(message) => err.with_client_message(message.clone()),
            None => err,
        }
    }
}

impl<R, D, T, F> Source<R> for JsonSource<D, F>
where
    R: ?Sized,
    D: DeserializeOwned,
    F: Fn(D, &R) -> Option<T>,
{
    type Output = T;

    fn fetch(&self, request: &R) -> Outcome<T> {
        serde_json::from_str::<D>(&self.raw)
            .classify_with(|error| self.decode_error(error))
            .and_then(|document| match (self.select)(document, request) {
                Some(value) => Outcome::Success(value),
                None => Outcome::Failure(LayeredError::source(
                    self.name.clone(),
                    "no entry in the JSON document matches the request",
                )),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<D, F> fmt::Debug for JsonSource<D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSource")
            .field("name", &self.name)
            .field("raw_len", &self.raw.len())
            .field("client_message", &self.client_message)
            .finish_non_exhaustive()
    }
}
