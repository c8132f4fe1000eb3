/// Why a backend call (or the session record behind it) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The backend answered 401. Handled globally by the client wrapper.
    #[error("{}", .message.as_deref().unwrap_or("unauthorized"))]
    Unauthorized { message: Option<String> },

    #[error("{}", status_text(.status, .message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("session storage: {0}")]
    Storage(String),

    #[error("invalid url: {0}")]
    Url(String),
}

fn status_text(status: &u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("request failed with status code {status}"),
    }
}

impl Error {
    /// The `message` field the backend put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Unauthorized { message } | Error::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Outcome of one backend call: the payload, or why there is none.
pub type ApiResult<T> = Result<T>;
