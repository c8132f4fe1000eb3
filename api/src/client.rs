use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::rc::Rc;
use types::{Error, Result};
use url::Url;

use crate::{Config, SessionStore};

/// Forces the app onto the login page once a session has expired.
pub trait LoginRedirect {
    fn redirect_to_login(&self);
}

/// One outgoing call. Built fresh per request and never reused.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub with_credentials: bool,
    /// Set once the expiry handling has run for this request.
    pub retried: bool,
}

impl RequestConfig {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            with_credentials: true,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json(mut self, body: &impl Serialize) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        decode_body(&body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn status_error(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);

    if status == StatusCode::UNAUTHORIZED {
        Error::Unauthorized { message }
    } else {
        Error::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// The mutating endpoints may answer with an empty body, which reads as `{}`.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.trim_ascii().is_empty() {
        b"{}".as_slice()
    } else {
        body
    };

    serde_json::from_slice(body).map_err(|error| {
        tracing::debug!(%error, "response body did not match the expected shape");
        Error::Decode(error.to_string())
    })
}

struct Inner {
    http: Client,
    base_url: Url,
    with_credentials: bool,
    session: SessionStore,
    redirect: Box<dyn LoginRedirect>,
}

/// The one HTTP client every page talks through.
///
/// Cloning is cheap; all clones share the same session and redirect target.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<Inner>,
}

impl ApiClient {
    pub fn configure(
        config: &Config,
        session: SessionStore,
        redirect: impl LoginRedirect + 'static,
    ) -> Result<Self> {
        Ok(Self {
            inner: Rc::new(Inner {
                http: build_http_client(config)?,
                base_url: config.api_url.clone(),
                with_credentials: config.with_credentials,
                session,
                redirect: Box::new(redirect),
            }),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Runs a request through both interception points.
    pub async fn send<T: DeserializeOwned>(&self, config: RequestConfig) -> Result<T> {
        let mut config = self.intercept_request(config)?;

        match self.dispatch(&config).await {
            Ok(value) => Ok(value),
            Err(error) => Err(self.intercept_error(&mut config, error)),
        }
    }

    /// Outgoing hook. Only stamps the static credentials flag.
    pub fn intercept_request(&self, mut config: RequestConfig) -> Result<RequestConfig> {
        config.with_credentials = self.inner.with_credentials;
        tracing::debug!(method = %config.method, path = %config.path, "sending request");
        Ok(config)
    }

    /// Failure hook. A 401 signs the user out and redirects to the login page,
    /// at most once per request. The error is always handed back.
    pub fn intercept_error(&self, config: &mut RequestConfig, error: Error) -> Error {
        if error.is_session_expired() && !config.retried {
            config.retried = true;
            tracing::warn!(path = %config.path, "session expired, redirecting to login");
            if let Err(err) = self.inner.session.clear() {
                tracing::warn!(%err, "could not clear the expired session");
            }
            self.inner.redirect.redirect_to_login();
        } else if !error.is_session_expired() {
            tracing::debug!(path = %config.path, %error, "request failed");
        }

        error
    }

    fn build(&self, config: &RequestConfig) -> Result<RequestBuilder> {
        let url = self
            .inner
            .base_url
            .join(config.path.trim_start_matches('/'))
            .map_err(|e| Error::Url(e.to_string()))?;

        let mut request = self.inner.http.request(config.method.clone(), url);
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        if let Some(body) = &config.body {
            request = request.json(body);
        }

        #[cfg(target_arch = "wasm32")]
        let request = if config.with_credentials {
            request.fetch_credentials_include()
        } else {
            request
        };

        Ok(request)
    }

    async fn dispatch<T: DeserializeOwned>(&self, config: &RequestConfig) -> Result<T> {
        self.build(config)?.try_send().await
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .cookie_store(config.with_credentials)
        .build()
        .map_err(|e| Error::Transport(e.to_string()))
}

// The browser owns cookies; credentials are requested per call instead.
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &Config) -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| Error::Transport(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
