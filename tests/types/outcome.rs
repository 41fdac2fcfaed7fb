use layer_rail::{FailureKind, LayeredError, Outcome};
use std::cell::Cell;

fn failed<T>() -> Outcome<T> {
    Outcome::failure(LayeredError::source("db-books", "connection refused"))
}

#[test]
fn map_passes_failure_through_untouched() {
    let original = LayeredError::source("db-books", "connection refused").with_client_message("try later");
    let outcome: Outcome<i32> = Outcome::failure(original.clone());

    let calls = Cell::new(0);
    let mapped = outcome.map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.into_failure(), Some(original));
}

#[test]
fn and_then_chains_only_on_success() {
    let doubled = Outcome::success(4).and_then(|x| Outcome::success(x * 2));
    assert_eq!(doubled.into_success(), Some(8));

    let calls = Cell::new(0);
    let skipped = failed::<i32>().and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x)
    });
    assert!(skipped.is_failure());
    assert_eq!(calls.get(), 0);
}

#[test]
fn recover_with_sees_the_typed_error() {
    let recovered = failed::<&str>().recover_with(|err| {
        assert_eq!(err.layer(), "db-books");
        Outcome::success("from json")
    });
    assert_eq!(recovered.into_success(), Some("from json"));
}

#[test]
fn recover_with_is_not_invoked_on_success() {
    let calls = Cell::new(0);
    let outcome = Outcome::success(1).recover_with(|_| {
        calls.set(calls.get() + 1);
        Outcome::success(2)
    });
    assert_eq!(outcome.into_success(), Some(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_failure_rewraps_for_higher_layer() {
    let service = failed::<()>().map_failure(|err| {
        LayeredError::service("book-service", "error when get books")
            .with_client_message("Error when get books, please try later")
            .caused_by(err)
    });

    let err = service.into_failure().unwrap();
    assert_eq!(err.kind(), FailureKind::Service);
    assert_eq!(err.cause().and_then(|c| c.as_layered()).map(|c| c.layer()), Some("db-books"));
}

#[test]
fn unwrap_helpers_drop_the_error_explicitly() {
    assert_eq!(failed::<i32>().unwrap_or(7), 7);
    assert_eq!(failed::<usize>().unwrap_or_else(|err| err.depth()), 1);
    assert_eq!(Outcome::success(3).unwrap_or(7), 3);
}

#[test]
fn result_conversions_round_trip() {
    let result: Result<i32, LayeredError> = failed::<i32>().into();
    assert!(result.is_err());

    let outcome: Outcome<i32> = Ok::<_, LayeredError>(5).into();
    assert_eq!(outcome.success_ref(), Some(&5));
    assert!(outcome.failure_ref().is_none());
}

#[test]
fn into_result_supports_question_mark() {
    fn total() -> Result<i32, LayeredError> {
        let a = Outcome::success(2).into_result()?;
        let b = failed::<i32>().into_result()?;
        Ok(a + b)
    }

    assert_eq!(total().unwrap_err().layer(), "db-books");
}

#[test]
fn collect_stops_at_first_failure() {
    let produced = Cell::new(0);
    let collected: Outcome<Vec<i32>> = (1..=5)
        .map(|i| {
            produced.set(produced.get() + 1);
            if i == 2 {
                failed()
            } else {
                Outcome::success(i)
            }
        })
        .collect();

    assert!(collected.is_failure());
    assert_eq!(produced.get(), 2);
}
