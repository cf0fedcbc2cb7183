//! Email address utilities: normalization, validation and masking.
//!
//! Account identity is the email address, compared case-insensitively, so
//! every layer normalizes through [`normalize_email`] before lookups or
//! inserts. Log output must never carry a full address; use [`mask_email`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email format check: local part, one `@`, dotted domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Normalize an email address for storage and lookup.
///
/// Trims surrounding whitespace and lowercases the whole address. Lowercasing
/// the local part too is deliberate: the store's uniqueness rule is
/// case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a string looks like a deliverable email address.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for log output.
///
/// Keeps the first character of the local part and the domain:
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
