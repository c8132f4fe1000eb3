use crate::{Route, use_api};
use dioxus::prelude::*;
use types::{Ack, ApiResult, Credentials, validate};

/// Where signup lands. Always the login page; a backend failure rides along
/// as the login page's notice so it is still readable after the redirect.
pub fn after_signup(result: &ApiResult<Ack>) -> Route {
    match result {
        Ok(_) => Route::login(),
        Err(err) => Route::login_with(
            err.server_message()
                .unwrap_or("Failed to register. Please try again."),
        ),
    }
}

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let email_value = email.read().clone();
        let password_value = password.read().clone();

        if let Err(msg) = validate::signup(&email_value, &password_value, &confirm.read()) {
            message.set(Some(msg.to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            message.set(None);
            let result = api
                .register(&Credentials::new(email_value, password_value))
                .await;
            if let Err(err) = &result {
                tracing::warn!(%err, "registration failed");
            }
            submitting.set(false);
            navigator().push(after_signup(&result));
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create your account" }
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
                    div { class: "form-group",
                        label { class: "form-label", r#for: "cpassword", "Confirm Password" }
                        input {
                            id: "cpassword",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: "{confirm}",
                            oninput: move |e| confirm.set(e.value()),
                        }
                    }
                    if let Some(text) = message.read().as_ref() {
                        p { class: "form-message form-message-error", "{text}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Signing up..." } else { "Sign up" }
                    }
                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::login(), "Log in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;
