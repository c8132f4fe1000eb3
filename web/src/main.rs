use dioxus::prelude::*;
use std::time::Duration;

mod guard;
mod views;

#[cfg(test)]
mod testing;

use api::{ApiClient, Config, LoginRedirect, SessionStore};
use guard::Access;
use views::{Dashboard, Leads, Login, Signup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[route("/signup")]
    Signup {},
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/leads")]
        Leads {},
}

impl Route {
    pub fn login() -> Self {
        Route::Login { error: None }
    }

    pub fn login_with(error: impl Into<String>) -> Self {
        Route::Login {
            error: Some(error.into()),
        }
    }
}

fn main() {
    #[cfg(feature = "web")]
    {
        dioxus::logger::initialize_default();
        dioxus::launch(App);
    }
}

/// Sends the router to the login page when the client wrapper sees a 401.
struct RouterRedirect;

impl LoginRedirect for RouterRedirect {
    fn redirect_to_login(&self) {
        navigator().replace(Route::login());
    }
}

fn configure_client() -> Result<ApiClient, String> {
    let config = Config::from_env().map_err(|e| format!("{e:#}"))?;
    tracing::info!(api_url = %config.api_url, "configured backend");

    ApiClient::configure(&config, SessionStore::platform(), RouterRedirect)
        .map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        configure_client().inspect_err(|error| tracing::error!(%error, "failed to start"))
    });

    let body = match client {
        Ok(api) => rsx! { Shell { api } },
        Err(message) => rsx! {
            div { class: "fatal",
                h1 { "Lead Management is unavailable" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        document::Title { "Lead Management" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        {body}
    }
}

/// Provides the session and client to everything below the router.
#[component]
fn Shell(api: ApiClient) -> Element {
    use_context_provider(|| api.session().clone());
    use_context_provider(|| api.clone());

    rsx! { Router::<Route> {} }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

#[component]
fn NavLink(to: Route, icon: &'static str, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Dashboard {}, Route::Dashboard {}) | (Route::Leads {}, Route::Leads {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "nav-link active" } else { "nav-link" },
            span { class: "nav-icon", "{icon}" }
            span { {children} }
        }
    }
}

const TOAST_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    serial: u64,
}

/// Page-level notifications - use `use_toast()` to access
///
/// Lives in the layout, so a toast outlasts the page that raised it.
#[derive(Clone, Copy)]
pub struct ToastState {
    current: Signal<Option<Toast>>,
    serial: Signal<u64>,
    timeout: Duration,
}

impl ToastState {
    fn new() -> Self {
        Self::with_timeout(TOAST_TIMEOUT)
    }

    fn with_timeout(timeout: Duration) -> Self {
        Self {
            current: Signal::new(None),
            serial: Signal::new(0),
            timeout,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), Severity::Error);
    }

    /// Shows `message` for a failed call. Expired sessions are skipped: the
    /// client wrapper has already sent the user to the login page.
    pub fn api_error(&mut self, message: &str, err: &types::Error) {
        if err.is_session_expired() {
            return;
        }
        tracing::warn!(%err, "{message}");
        self.error(message);
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    fn show(&mut self, message: String, severity: Severity) {
        let serial = *self.serial.peek() + 1;
        self.serial.set(serial);
        self.current.set(Some(Toast {
            message,
            severity,
            serial,
        }));
    }

    /// Hides toast `serial` unless a newer one has replaced it.
    fn expire(&mut self, serial: u64) {
        if self.current.peek().as_ref().is_some_and(|t| t.serial == serial) {
            self.current.set(None);
        }
    }
}

pub fn use_toast() -> ToastState {
    use_context::<ToastState>()
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
fn Snackbar() -> Element {
    let mut toast_state = use_toast();

    // The timer belongs to this scope, not to whichever page raised the toast.
    use_effect(move || {
        let Some(serial) = toast_state.current.read().as_ref().map(|t| t.serial) else {
            return;
        };
        spawn(async move {
            sleep(toast_state.timeout).await;
            toast_state.expire(serial);
        });
    });

    let toast = toast_state.current.read().clone();

    if let Some(toast) = toast {
        let class = match toast.severity {
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
        };

        rsx! {
            div { class, role: "alert",
                span { class: "toast-message", "{toast.message}" }
                button {
                    class: "toast-close",
                    onclick: move |_| toast_state.dismiss(),
                    "×"
                }
            }
        }
    } else {
        rsx! {}
    }
}

/// Route guard: protected pages only render with a stored session.
#[component]
fn AuthenticatedLayout() -> Element {
    let session = use_session();
    use_context_provider(ToastState::new);

    match guard::check(&session) {
        Access::Granted(user) => {
            let label = user.label().to_string();
            let logout = move |_: MouseEvent| {
                if let Err(err) = session.clear() {
                    tracing::error!(%err, "could not clear the session on logout");
                }
                navigator().push(Route::login());
            };

            rsx! {
                div { class: "app-layout",
                    aside { class: "sidebar",
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::Dashboard {}, icon: "📊", "Dashboard" }
                            NavLink { to: Route::Leads {}, icon: "👥", "Leads" }
                        }
                        button { class: "sidebar-logout", onclick: logout,
                            span { "🚪" }
                            span { "Logout" }
                        }
                    }
                    div { class: "main-column",
                        header { class: "top-bar",
                            h1 { class: "top-bar-title", "Lead Management" }
                            span { class: "top-bar-user", "{label}" }
                        }
                        main { class: "main-content",
                            Outlet::<Route> {}
                        }
                    }
                    Snackbar {}
                }
            }
        }
        Access::Denied => {
            navigator().replace(Route::login());
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
