use layer_rail::batch::run_collect_all_parallel;
use layer_rail::traits::source_fn;
use layer_rail::{LayeredError, Outcome};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn parallel_collect_all_keeps_input_order() {
    let attempts = AtomicUsize::new(0);
    let books = source_fn("db-books", |id: &u32| {
        attempts.fetch_add(1, Ordering::SeqCst);
        if id % 10 == 0 {
            Outcome::failure(LayeredError::source("db-books", format!("book {id} is corrupt")))
        } else {
            Outcome::success(*id)
        }
    });

    let batch = run_collect_all_parallel(&books, (1..=200u32).collect());

    assert_eq!(attempts.load(Ordering::SeqCst), 200);
    let ids: Vec<u32> = batch.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, (1..=200).collect::<Vec<_>>());
    assert_eq!(batch.failure_count(), 20);
    assert!(batch.successes().all(|(id, value)| id == value));
}
