use api::SessionStore;
use types::User;

/// What a protected route may show.
///
/// Decided from the stored session alone, on every render. Whether the
/// session is still valid server-side only surfaces later, as a 401.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Granted(User),
    Denied,
}

pub fn check(session: &SessionStore) -> Access {
    match session.user() {
        Some(user) => Access::Granted(user),
        None => Access::Denied,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
