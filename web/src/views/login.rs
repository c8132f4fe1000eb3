use crate::{Route, use_api, use_session};
use dioxus::prelude::*;
use types::{ApiResult, Credentials, LoginResponse, User, validate};

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(User),
    Rejected(String),
}

impl LoginOutcome {
    pub fn from_result(result: ApiResult<LoginResponse>) -> Self {
        match result {
            Ok(response) => match response.into_user() {
                Some(user) => LoginOutcome::SignedIn(user),
                None => LoginOutcome::Rejected("Login failed.".into()),
            },
            Err(err) => LoginOutcome::Rejected(
                err.server_message().unwrap_or("Login failed.").to_string(),
            ),
        }
    }
}

#[component]
pub fn Login(error: Option<String>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let already_signed_in = session.is_active();
    use_effect(move || {
        if already_signed_in {
            navigator().replace(Route::Dashboard {});
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email.read().clone();
        let password_value = password.read().clone();

        if let Err(msg) = validate::login(&email_value, &password_value) {
            message.set(Some(msg.to_string()));
            return;
        }

        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            let credentials = Credentials::new(email_value, password_value);
            match LoginOutcome::from_result(api.login(&credentials).await) {
                LoginOutcome::SignedIn(user) => match session.sign_in(&user) {
                    Ok(()) => {
                        message.set(None);
                        navigator().push(Route::Dashboard {});
                    }
                    Err(err) => {
                        tracing::error!(%err, "could not store the session");
                        message.set(Some("Failed to log in. Please try again.".into()));
                    }
                },
                LoginOutcome::Rejected(reason) => message.set(Some(reason)),
            }
            submitting.set(false);
        });
    };

    let shown = message.read().clone().or(error);

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                p { class: "auth-title", "Sign in to your account" }
                form { class: "auth-form", onsubmit,
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Your email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "name@company.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    if let Some(text) = shown {
                        p { class: "form-message form-message-error", "{text}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Signing in..." } else { "Sign in" }
                    }
                    p { class: "auth-switch",
                        "Don’t have an account yet? "
                        Link { to: Route::Signup {}, "Sign up" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
