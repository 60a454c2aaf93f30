//! Primitive field rules and their user-facing messages.
//!
//! Messages are shown verbatim next to the offending input, so the exact text
//! is part of the client's contract with its users.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_URL: &str = "Invalid url";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
pub const PASSWORD_NEEDS_SYMBOL: &str = "Password must contain at least one special character (@$!%*?&)";
pub const PASSWORDS_DONT_MATCH: &str = "Passwords don't match";
pub const BOARD_NAME_REQUIRED: &str = "Board name is required";

/// Minimum length of a new password, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols accepted by the special-character password rule.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

// Lookarounds are not available in `regex`, so the leading-dot and
// double-dot exclusions are checked separately in `is_email`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap_or_else(|e| unreachable!("email pattern is a valid regex: {e}"))
});

/// `local@domain` with a dotted domain and an alphabetic top-level label.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Absolute URL with a scheme, as accepted by the URL parser.
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Every strength rule `password` fails, in rule order.
pub fn password_strength_failures(password: &str) -> Vec<&'static str> {
    let mut failures = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        failures.push(PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        failures.push(PASSWORD_NEEDS_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        failures.push(PASSWORD_NEEDS_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failures.push(PASSWORD_NEEDS_DIGIT);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        failures.push(PASSWORD_NEEDS_SYMBOL);
    }
    failures
}
