use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Key of the persisted session record in the browser's `localStorage`.
pub const SESSION_STORAGE_KEY: &str = "user";

/// The user object handed back by a successful login.
///
/// The backend owns its shape, so it is kept as a JSON object and only the
/// fields the UI shows are looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field)?.as_str()
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("_id").or_else(|| self.get_str("id"))
    }

    /// What the top bar shows for the signed-in user.
    pub fn label(&self) -> &str {
        self.get_str("email")
            .or_else(|| self.get_str("name"))
            .or_else(|| self.id())
            .unwrap_or("Signed in")
    }
}

pub fn encode_session(user: &User) -> Result<String> {
    serde_json::to_string(user).map_err(|e| Error::Storage(format!("failed to serialize session: {e}")))
}

/// Decodes a stored record. A stored `null` means "no session".
pub fn decode_session(encoded: &str) -> Result<Option<User>> {
    serde_json::from_str(encoded)
        .map_err(|e| Error::Storage(format!("failed to parse session JSON: {e}")))
}
