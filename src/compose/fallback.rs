use crate::traits::{BoxedSource, Source};
use crate::types::{LayeredError, Outcome};
use std::borrow::Cow;
use std::fmt;

/// A [`Source`] that tries an ordered list of sources until one succeeds.
///
/// Each source is attempted at most once per `fetch`, in the order it was
/// added. The first success is returned immediately and later sources are
/// not invoked. When every source fails, the result is a
/// [`FailureKind::SourcesExhausted`](crate::FailureKind::SourcesExhausted)
/// error raised by this composer whose cause is the last source's error.
/// An empty composer fails with
/// [`FailureKind::NoSources`](crate::FailureKind::NoSources) without
/// invoking anything.
///
/// Only the last error survives in the returned value. Every failed source
/// is logged at `warn` with its formatted error before the next one is
/// tried, so earlier failures stay visible in the logs.
///
/// # Examples
///
/// ```
/// use layer_rail::compose::Fallback;
/// use layer_rail::traits::{source_fn, Source};
/// use layer_rail::{FailureKind, LayeredError, Outcome};
///
/// let books = Fallback::new("books")
///     .with_source(source_fn("db", |_: &str| {
///         Outcome::<String>::failure(LayeredError::source("db", "connection refused"))
///     }))
///     .with_source(source_fn("json", |id: &str| Outcome::success(format!("Book {id}"))));
///
/// assert_eq!(books.fetch("1").into_success().as_deref(), Some("Book 1"));
///
/// let empty: Fallback<str, String> = Fallback::new("books");
/// assert_eq!(empty.fetch("1").into_failure().unwrap().kind(), FailureKind::NoSources);
/// ```
pub struct Fallback<R: ?Sized, T> {
    layer: Cow<'static, str>,
    client_message: Option<Cow<'static, str>>,
    sources: Vec<BoxedSource<R, T>>,
}

impl<R: ?Sized, T> Fallback<R, T> {
    /// Creates a composer raising errors under the `layer` name.
    pub fn new(layer: impl Into<Cow<'static, str>>) -> Self {
        Self { layer: layer.into(), client_message: None, sources: Vec::new() }
    }

    /// Appends a source after the ones already configured.
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: Source<R, Output = T> + Send + Sync + 'static,
    {
        self.sources.push(Box::new(source));
        self
    }

    /// Client message attached to the error raised when every source failed.
    pub fn with_client_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.client_message = Some(message.into());
        self
    }

    #[inline]
    pub fn layer(&self) -> &str {
        &self.layer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<R: ?Sized, T> Source<R> for Fallback<R, T> {
    type Output = T;

    fn fetch(&self, request: &R) -> Outcome<T> {
        let mut last_failure = None;

        for (index, source) in self.sources.iter().enumerate() {
            match source.fetch(request) {
                Outcome::Success(value) => return Outcome::Success(value),
                Outcome::Failure(error) => {
                    tracing::warn!(
                        layer = %self.layer,
                        source = source.name(),
                        index,
                        error = %error,
                        "fallback source failed"
                    );
                    last_failure = Some(error);
                },
            }
        }

        let error = match last_failure {
            None => LayeredError::no_sources(self.layer.clone()),
            Some(last) => {
                let exhausted = LayeredError::exhausted(self.layer.clone(), last);
                match &self.client_message {
                    Some(message) => exhausted.with_client_message(message.clone()),
                    None => exhausted,
                }
            },
        };
        Outcome::Failure(error)
    }

    fn name(&self) -> &str {
        &self.layer
    }
}

impl<R: ?Sized, T> fmt::Debug for Fallback<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallback")
            .field("layer", &self.layer)
            .field("client_message", &self.client_message)
            .field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Builds a [`Fallback`] from already boxed sources, keeping their order.
///
/// # Examples
///
/// ```
/// use layer_rail::compose::compose;
/// use layer_rail::traits::{source_fn, BoxedSource, Source};
/// use layer_rail::Outcome;
///
/// let primary: BoxedSource<u32, u32> = Box::new(source_fn("primary", |id: &u32| Outcome::success(*id)));
/// let chain = compose("ids", vec![primary]);
/// assert_eq!(chain.fetch(&7).into_success(), Some(7));
/// ```
pub fn compose<R, T, I>(layer: impl Into<Cow<'static, str>>, sources: I) -> Fallback<R, T>
where
    R: ?Sized,
    I: IntoIterator<Item = BoxedSource<R, T>>,
{
    Fallback { layer: layer.into(), client_message: None, sources: sources.into_iter().collect() }
}
