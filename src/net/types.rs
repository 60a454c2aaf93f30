//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Records are passed through verbatim: nothing is computed or defaulted
//! client-side beyond `Option` for fields the backend may omit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A workspace member as returned by `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Role label within the workspace (e.g. `"admin"`), if assigned.
    #[serde(default)]
    pub role: Option<String>,
    /// Avatar image reference, if uploaded.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A board as returned by `/boards` and `/public/boards/{url}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Public slug, present when the board is shared.
    #[serde(default)]
    pub url: Option<String>,
}

/// Session token issued by the sign-in endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// The backend's user-facing message from an error body.
///
/// Accepts `{ "data": { "message": ... } }` or `{ "message": ... }`,
/// preferring the `data` envelope. Blank or non-string messages count as
/// missing, and a malformed `data` does not hide a top-level message.
pub(crate) fn error_message(body: &serde_json::Value) -> Option<String> {
    ["/data/message", "/message"]
        .into_iter()
        .filter_map(|pointer| body.pointer(pointer).and_then(serde_json::Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_owned)
}
