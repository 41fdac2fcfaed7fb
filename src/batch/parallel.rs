use crate::traits::Source;
use crate::types::BatchResult;
use rayon::prelude::*;

/// Collect-all policy with requests fetched on the rayon thread pool.
///
/// Results are reassembled in input order, and each request gets its own
/// outcome, so one failure never affects another request. Sources are
/// shared across threads through `&S`, which is why they must be `Sync`.
///
/// # Examples
///
/// ```
/// use layer_rail::batch::run_collect_all_parallel;
/// use layer_rail::traits::source_fn;
/// use layer_rail::Outcome;
///
/// let squares = source_fn("squares", |n: &u64| Outcome::success(n * n));
/// let batch = run_collect_all_parallel(&squares, (1..=100).collect());
///
/// let values: Vec<u64> = batch.successes().map(|(_, v)| *v).collect();
/// assert_eq!(values[..3], [1, 4, 9]);
/// assert_eq!(values.len(), 100);
/// ```
pub fn run_collect_all_parallel<S, R>(source: &S, requests: Vec<R>) -> BatchResult<R, <S as Source<R>>::Output>
where
    S: Source<R> + Sync + ?Sized,
    <S as Source<R>>::Output: Send,
    R: Send,
{
    requests
        .into_par_iter()
        .map(|request| {
            let outcome = source.fetch(&request);
            (request, outcome)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
