//! Client-side form checks. Nothing that fails here reaches the network.

use regex::Regex;
use std::sync::LazyLock;

use crate::NewLead;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Per-field errors of the lead dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

pub fn lead(form: &NewLead) -> LeadFormErrors {
    let mut errors = LeadFormErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !looks_like_email(&form.email) {
        errors.email = Some("Invalid email format");
    }

    errors
}

pub fn login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    Ok(())
}

pub fn signup(email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("All fields are required.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

/// `\S+@\S+\.\S+` anywhere in the value, unanchored.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

pub fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
