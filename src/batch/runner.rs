use crate::traits::Source;
use crate::types::{BatchResult, Outcome};

/// Applies one [`Source`] to many requests under an explicit policy.
///
/// # Examples
///
/// ```
/// use layer_rail::batch::BatchRunner;
/// use layer_rail::traits::source_fn;
/// use layer_rail::{LayeredError, Outcome};
///
/// let runner = BatchRunner::new(source_fn("books", |id: &u32| {
///     if *id == 2 {
///         Outcome::failure(LayeredError::source("books", "book 2 is corrupt"))
///     } else {
///         Outcome::success(format!("Book {id}"))
///     }
/// }));
///
/// assert!(runner.fail_fast(vec![1u32, 2, 3]).is_failure());
///
/// let all = runner.collect_all(vec![1u32, 2, 3]);
/// assert_eq!(all.len(), 3);
/// assert_eq!(all.failure_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner<S> {
    source: S,
}

impl<S> BatchRunner<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Stops at the first failure. See [`run_fail_fast`].
    pub fn fail_fast<R, I>(&self, requests: I) -> Outcome<Vec<<S as Source<R>>::Output>>
    where
        S: Source<R>,
        I: IntoIterator<Item = R>,
    {
        run_fail_fast(&self.source, requests)
    }

    /// Attempts every request. See [`run_collect_all`].
    pub fn collect_all<R, I>(&self, requests: I) -> BatchResult<R, <S as Source<R>>::Output>
    where
        S: Source<R>,
        I: IntoIterator<Item = R>,
    {
        run_collect_all(&self.source, requests)
    }
}

/// Fetches every request in input order, stopping at the first failure.
///
/// The failure is returned unchanged and the remaining requests are never
/// attempted. When all requests succeed, the values come back in input order.
pub fn run_fail_fast<S, R, I>(source: &S, requests: I) -> Outcome<Vec<<S as Source<R>>::Output>>
where
    S: Source<R> + ?Sized,
    I: IntoIterator<Item = R>,
{
    let requests = requests.into_iter();
    let mut values = Vec::with_capacity(requests.size_hint().0);

    for (index, request) in requests.enumerate() {
        match source.fetch(&request) {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => {
                tracing::debug!(source = source.name(), index, error = %error, "batch stopped at first failure");
                return Outcome::Failure(error);
            },
        }
    }

    Outcome::Success(values)
}

/// Fetches every request in input order, whatever earlier requests returned.
///
/// Returns one outcome per request, paired with the request itself.
pub fn run_collect_all<S, R, I>(source: &S, requests: I) -> BatchResult<R, <S as Source<R>>::Output>
where
    S: Source<R> + ?Sized,
    I: IntoIterator<Item = R>,
{
    let requests = requests.into_iter();
    let mut batch = BatchResult::with_capacity(requests.size_hint().0);

    for request in requests {
        let outcome = source.fetch(&request);
        batch.push(request, outcome);
    }

    if !batch.all_succeeded() {
        tracing::debug!(
            source = source.name(),
            failed = batch.failure_count(),
            total = batch.len(),
            "batch finished with failures"
        );
    }
    batch
}
