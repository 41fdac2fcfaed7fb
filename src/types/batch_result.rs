use crate::types::{ErrorContext, ErrorVec, LayeredError, Outcome};
use std::borrow::Cow;

/// Per-request outcomes of a collect-all batch, in input order.
///
/// Every request has exactly one outcome, so `len()` always equals the
/// number of requests the batch received.
///
/// # Examples
///
/// ```
/// use layer_rail::{BatchResult, LayeredError, Outcome};
///
/// let batch: BatchResult<&str, i32> = vec![
///     ("1", Outcome::success(1)),
///     ("2", Outcome::failure(LayeredError::source("db", "row 2 is corrupt"))),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.failure_count(), 1);
/// assert!(!batch.all_succeeded());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult<R, T> {
    entries: Vec<(R, Outcome<T>)>,
}

impl<R, T> BatchResult<R, T> {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub(crate) fn push(&mut self, request: R, outcome: Outcome<T>) {
        self.entries.push((request, outcome));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(request, outcome)` pairs in input order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, (R, Outcome<T>)> {
        self.entries.iter()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome<T>> {
        self.entries.iter().map(|(_, outcome)| outcome)
    }

    pub fn successes(&self) -> impl Iterator<Item = (&R, &T)> {
        self.entries
            .iter()
            .filter_map(|(request, outcome)| outcome.success_ref().map(|value| (request, value)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&R, &LayeredError)> {
        self.entries
            .iter()
            .filter_map(|(request, outcome)| outcome.failure_ref().map(|error| (request, error)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.entries.iter().all(|(_, outcome)| outcome.is_success())
    }

    #[inline]
    pub fn into_entries(self) -> Vec<(R, Outcome<T>)> {
        self.entries
    }

    /// Keeps only the errors, in input order.
    pub fn into_errors(self) -> ErrorVec<LayeredError> {
        self.entries.into_iter().filter_map(|(_, outcome)| outcome.into_failure()).collect()
    }

    /// Splits the batch into succeeded and failed requests, each in input order.
    pub fn partition(self) -> (Vec<(R, T)>, Vec<(R, LayeredError)>) {
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (request, outcome) in self.entries {
            match outcome {
                Outcome::Success(value) => succeeded.push((request, value)),
                Outcome::Failure(error) => failed.push((request, error)),
            }
        }
        (succeeded, failed)
    }

    /// Folds the batch into one outcome for a higher layer.
    ///
    /// Succeeds with every value if no request failed. Otherwise fails with a
    /// [`FailureKind::Service`](crate::FailureKind::Service) error raised by
    /// `layer`, caused by the first failure and annotated with the failed and
    /// total request counts. Every later failure is kept as a
    /// `request[index]` metadata context holding its formatted chain, so no
    /// internal detail is dropped by the fold.
    ///
    /// # Examples
    ///
    /// ```
    /// use layer_rail::{BatchResult, FailureKind, LayeredError, Outcome};
    ///
    /// let batch: BatchResult<u32, &str> = vec![
    ///     (1, Outcome::success("Book 1")),
    ///     (2, Outcome::failure(LayeredError::source("db", "row 2 is corrupt"))),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let err = batch.into_outcome("book-service", "could not load every book").into_failure().unwrap();
    /// assert_eq!(err.kind(), FailureKind::Service);
    /// assert_eq!(err.cause().and_then(|c| c.as_layered()).map(|c| c.layer()), Some("db"));
    /// ```
    pub fn into_outcome(
        self,
        layer: impl Into<Cow<'static, str>>,
        internal_message: impl Into<Cow<'static, str>>,
    ) -> Outcome<Vec<T>> {
        let total = self.entries.len();
        let mut values = Vec::with_capacity(total);
        let mut first_failure = None;
        let mut later_failures = Vec::new();

        for (index, (_, outcome)) in self.entries.into_iter().enumerate() {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) if first_failure.is_none() => first_failure = Some(error),
                Outcome::Failure(error) => later_failures.push((index, error)),
            }
        }

        let Some(first) = first_failure else {
            return Outcome::Success(values);
        };

        let failed = later_failures.len() + 1;
        let mut aggregate = LayeredError::service(layer, internal_message)
            .with_context(ErrorContext::metadata("failed", failed.to_string()))
            .with_context(ErrorContext::metadata("total", total.to_string()));
        for (index, error) in later_failures {
            aggregate = aggregate.with_context(ErrorContext::metadata(format!("request[{index}]"), error.error_chain()));
        }
        Outcome::Failure(aggregate.caused_by(first))
    }
}

impl<R, T> FromIterator<(R, Outcome<T>)> for BatchResult<R, T> {
    fn from_iter<I: IntoIterator<Item = (R, Outcome<T>)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<R, T> IntoIterator for BatchResult<R, T> {
    type Item = (R, Outcome<T>);
    type IntoIter = std::vec::IntoIter<(R, Outcome<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, R, T> IntoIterator for &'a BatchResult<R, T> {
    type Item = &'a (R, Outcome<T>);
    type IntoIter = std::slice::Iter<'a, (R, Outcome<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
