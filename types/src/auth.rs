use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::User;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Body of `/users/login` and `/users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// The backend signals success through the message text, not the status.
    pub fn is_success(&self) -> bool {
        self.message == LOGIN_SUCCESS_MESSAGE && self.user.is_some()
    }

    pub fn into_user(self) -> Option<User> {
        if self.is_success() { self.user } else { None }
    }
}

/// Acknowledgement returned by the mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

mod secret_string {
    use secrecy::SecretString;
    use serde::Serializer;

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }
}
