use super::*;
use serde_json::json;
use types::Error;

fn response(value: serde_json::Value) -> LoginResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn successful_login_yields_the_user() {
    let outcome = LoginOutcome::from_result(Ok(response(json!({
        "message": "Login successful",
        "user": { "id": "u1", "email": "a@b.com" },
    }))));

    let LoginOutcome::SignedIn(user) = outcome else {
        panic!("expected a signed-in outcome, got {outcome:?}");
    };
    assert_eq!(user.id(), Some("u1"));
    assert_eq!(user.label(), "a@b.com");
}

#[test]
fn any_other_message_is_a_failed_login() {
    let outcome = LoginOutcome::from_result(Ok(response(json!({
        "message": "Welcome back",
        "user": { "id": "u1" },
    }))));

    assert_eq!(outcome, LoginOutcome::Rejected("Login failed.".into()));
}

#[test]
fn backend_message_is_shown_on_rejection() {
    let outcome = LoginOutcome::from_result(Err(Error::Status {
        status: 400,
        message: Some("Invalid credentials".into()),
    }));

    assert_eq!(outcome, LoginOutcome::Rejected("Invalid credentials".into()));
}

#[test]
fn transport_failures_fall_back_to_a_generic_message() {
    let outcome = LoginOutcome::from_result(Err(Error::Transport("connection refused".into())));

    assert_eq!(outcome, LoginOutcome::Rejected("Login failed.".into()));
}
