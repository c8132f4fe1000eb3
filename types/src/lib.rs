mod auth;
mod error;
mod lead;
pub mod page;
mod session;
pub mod validate;

pub use auth::{Ack, Credentials, LOGIN_SUCCESS_MESSAGE, LoginResponse};
pub use error::{ApiResult, Error, Result};
pub use lead::{Lead, LeadId, LeadStats, LeadStatus, NewLead};
pub use session::{SESSION_STORAGE_KEY, User, decode_session, encode_session};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
