use super::*;
use crate::views::login::LoginOutcome;
use api::{ApiClient, Config, LoginRedirect, RequestConfig};
use serde_json::json;
use std::{cell::Cell, rc::Rc};
use types::{Error, LoginResponse};

#[derive(Clone, Default)]
struct CountingRedirect(Rc<Cell<usize>>);

impl LoginRedirect for CountingRedirect {
    fn redirect_to_login(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn signed_in(store: &SessionStore) -> User {
    let response: LoginResponse = serde_json::from_value(json!({
        "message": "Login successful",
        "user": { "id": "u1", "email": "a@b.com" },
    }))
    .unwrap();
    let LoginOutcome::SignedIn(user) = LoginOutcome::from_result(Ok(response)) else {
        panic!("login response should sign in");
    };
    store.sign_in(&user).unwrap();
    user
}

#[test]
fn no_session_is_denied() {
    assert_eq!(check(&SessionStore::memory()), Access::Denied);
}

#[test]
fn protected_pages_render_after_login() {
    let store = SessionStore::memory();
    let user = signed_in(&store);

    assert_eq!(check(&store), Access::Granted(user));
}

#[test]
fn logout_denies_access() {
    let store = SessionStore::memory();
    signed_in(&store);
    store.clear().unwrap();

    assert_eq!(check(&store), Access::Denied);
}

#[test]
fn expired_session_is_denied_after_the_interceptor_runs() {
    let store = SessionStore::memory();
    signed_in(&store);
    let redirect = CountingRedirect::default();
    let config = Config::new("http://127.0.0.1:9").unwrap();
    let client = ApiClient::configure(&config, store.clone(), redirect.clone()).unwrap();

    let mut request = RequestConfig::get("/leads/get");
    client.intercept_error(&mut request, Error::Unauthorized { message: None });

    assert_eq!(check(&store), Access::Denied);
    assert_eq!(redirect.0.get(), 1);
}
