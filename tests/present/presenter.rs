use crate::support::with_captured_logs;
use layer_rail::present::{OutcomePresenter, RenderDecision, DEFAULT_GENERIC_MESSAGE};
use layer_rail::{ChainFormatConfig, LayeredError, Outcome};

fn db_failure() -> LayeredError {
    LayeredError::source("db-books", "password authentication failed for user \"books\"")
}

#[test]
fn success_is_shown() {
    let decision = OutcomePresenter::new().present(Outcome::success("Book 1"));
    assert_eq!(decision, RenderDecision::Show("Book 1"));
    assert!(decision.is_show());
}

#[test]
fn client_message_is_shown_verbatim() {
    let err = LayeredError::service("book-service", "error when get books")
        .with_client_message("Error when get books, please try later")
        .caused_by(db_failure());

    let decision = OutcomePresenter::new().present(Outcome::<()>::failure(err));
    assert_eq!(decision, RenderDecision::ShowUserMessage("Error when get books, please try later".into()));
}

#[test]
fn no_client_message_means_generic_failure() {
    let presenter = OutcomePresenter::new();
    let decision = presenter.present(Outcome::<()>::failure(db_failure()));

    assert_eq!(decision, RenderDecision::ShowGenericFailure);
    assert_eq!(presenter.user_text(&decision), Some(DEFAULT_GENERIC_MESSAGE));
}

#[test]
fn internal_message_never_reaches_the_user() {
    let presenter = OutcomePresenter::new();
    let decision = presenter.present(Outcome::<()>::failure(db_failure()));

    let text = presenter.user_text(&decision).unwrap();
    assert!(!text.contains("password"));
}

#[test]
fn generic_message_is_configurable() {
    let presenter = OutcomePresenter::new().with_generic_message("Oops");
    let decision = presenter.present(Outcome::<()>::failure(db_failure()));

    assert_eq!(presenter.generic_message(), "Oops");
    assert_eq!(presenter.user_text(&decision), Some("Oops"));
}

#[test]
fn layer_default_applies_when_no_client_message() {
    let presenter = OutcomePresenter::new().with_layer_default("db-books", "Storage is down, please try later");
    let err = LayeredError::service("book-service", "could not list").caused_by(db_failure());

    let decision = presenter.present(Outcome::<()>::failure(err));
    assert_eq!(decision, RenderDecision::ShowUserMessage("Storage is down, please try later".into()));
}

#[test]
fn explicit_client_message_beats_layer_default() {
    let presenter = OutcomePresenter::new().with_layer_default("db-books", "Storage is down");
    let err = LayeredError::service("book-service", "could not list")
        .with_client_message("please try later")
        .caused_by(db_failure());

    let decision = presenter.present(Outcome::<()>::failure(err));
    assert_eq!(decision, RenderDecision::ShowUserMessage("please try later".into()));
    assert_eq!(decision.into_value(), None);
}

#[test]
fn show_decision_has_no_user_text() {
    let presenter = OutcomePresenter::new();
    let decision = presenter.present(Outcome::success(1));
    assert_eq!(presenter.user_text(&decision), None);
}

#[test]
fn failure_is_logged_with_full_chain() {
    let presenter = OutcomePresenter::new();
    let err = LayeredError::service("book-service", "error when get books")
        .with_client_message("please try later")
        .caused_by(db_failure());

    let (decision, logs) = with_captured_logs(|| presenter.present(Outcome::<()>::failure(err)));

    assert!(!decision.is_show());
    let logs = logs.contents();
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("outcome failed"));
    assert!(logs.contains("password authentication failed"));
}

#[test]
fn success_is_not_logged() {
    let presenter = OutcomePresenter::new();
    let (_, logs) = with_captured_logs(|| presenter.present(Outcome::success(1)));
    assert!(logs.contents().is_empty());
}

#[test]
fn diagnostic_report_uses_configured_format() {
    let presenter = OutcomePresenter::new().with_format(ChainFormatConfig::compact());
    let err = LayeredError::service("book-service", "error when get books").caused_by(db_failure());

    assert_eq!(
        presenter.diagnostic_report(&err),
        "[book-service] error when get books | [db-books] password authentication failed for user \"books\""
    );
}
