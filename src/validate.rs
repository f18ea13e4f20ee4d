//! Credential format checks
//!
//! Both checks are intentionally loose: they reject obvious typos before a
//! single request is spent, and leave real validation to the API.

/// An email is accepted when it contains both `@` and `.`.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// An API key is accepted when it is non-empty and every character is
/// alphanumeric. Keys with `-` or `_` are rejected.
pub fn is_valid_api_key(api_key: &str) -> bool {
    !api_key.is_empty() && api_key.chars().all(char::is_alphanumeric)
}
