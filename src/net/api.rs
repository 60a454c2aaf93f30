//! Typed REST client for the Trackboard backend.
//!
//! ERROR HANDLING
//! ==============
//! Every operation normalizes failure into a [`RequestError`] whose message
//! is safe to show the user: the backend's own message when the error body
//! carries one, otherwise a fixed per-operation fallback. Transport errors,
//! non-2xx statuses and undecodable bodies are all treated this way. There
//! are no retries; the calling page decides what to show.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
use super::types::{AuthToken, Board, User, error_message};
use crate::config::ClientConfig;
use crate::forms::auth::{FederatedAuthInput, LoginInput, SignupInput, UpdatePasswordInput};
use crate::forms::board::{CreateBoardInput, UpdateBoardInput};

pub const LIST_USERS_FAILED: &str = "Get workspace users failed";
pub const GET_USER_FAILED: &str = "Get user failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const FEDERATED_LOGIN_FAILED: &str = "Sign in with provider failed";
pub const UPDATE_PASSWORD_FAILED: &str = "Update password failed";
pub const LIST_BOARDS_FAILED: &str = "Get boards failed";
pub const GET_BOARD_FAILED: &str = "Get board failed";
pub const GET_PUBLIC_BOARD_FAILED: &str = "Get public board failed";
pub const CREATE_BOARD_FAILED: &str = "Create board failed";
pub const UPDATE_BOARD_FAILED: &str = "Update board failed";

/// A backend call failed; `message` is user-displayable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
    /// HTTP status when a response was received.
    pub status: Option<u16>,
}

impl RequestError {
    fn fallback(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            status: None,
        }
    }

    /// Build the error for a non-2xx response.
    pub fn from_response(response: &ApiResponse, fallback: &str) -> Self {
        Self {
            message: backend_message(&response.body).unwrap_or_else(|| fallback.to_owned()),
            status: Some(response.status),
        }
    }
}

/// User-facing message from an error body, if it carries one.
pub fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    error_message(&value)
}

/// Client used by pages; browser transport rooted at the configured base URL.
pub type Api = ApiClient<HttpTransport>;

impl Api {
    pub fn from_config(config: &ClientConfig) -> Self {
        ApiClient::new(HttpTransport::new(config.api_base_url.clone()))
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, token: None }
    }

    /// A copy of this client that authenticates with `token`.
    #[must_use]
    pub fn authorized(&self, token: Option<String>) -> Self
    where
        T: Clone,
    {
        Self {
            transport: self.transport.clone(),
            token,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
        fallback: &str,
    ) -> Result<ApiResponse, RequestError> {
        let request = ApiRequest {
            method,
            path,
            body,
            bearer: self.token.clone(),
        };
        let label = format!("{} {}", method.as_str(), request.path);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{label}: {e}");
            RequestError::fallback(fallback)
        })?;
        if !response.is_success() {
            let err = RequestError::from_response(&response, fallback);
            log::warn!("{label}: status {} ({})", response.status, err.message);
            return Err(err);
        }
        Ok(response)
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
        fallback: &str,
    ) -> Result<R, RequestError> {
        let response = self.send(method, path, body, fallback).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            log::warn!("undecodable response body: {e}");
            RequestError {
                message: fallback.to_owned(),
                status: Some(response.status),
            }
        })
    }

    /// All users of the current workspace, in backend order.
    pub async fn list_users(&self) -> Result<Vec<User>, RequestError> {
        self.fetch(Method::Get, "/users".to_owned(), None, LIST_USERS_FAILED).await
    }

    /// A single user. The backend owns id validation, so non-positive ids
    /// are sent as-is and its rejection message is surfaced.
    pub async fn get_user(&self, id: i64) -> Result<User, RequestError> {
        if id <= 0 {
            log::debug!("looking up non-positive user id {id}");
        }
        self.fetch(Method::Get, format!("/users/{id}"), None, GET_USER_FAILED).await
    }

    pub async fn login(&self, input: &LoginInput) -> Result<AuthToken, RequestError> {
        let body = to_body(input, LOGIN_FAILED)?;
        self.fetch(Method::Post, "/auth/login".to_owned(), Some(body), LOGIN_FAILED).await
    }

    pub async fn signup(&self, input: &SignupInput) -> Result<AuthToken, RequestError> {
        let body = to_body(input, SIGNUP_FAILED)?;
        self.fetch(Method::Post, "/auth/signup".to_owned(), Some(body), SIGNUP_FAILED).await
    }

    pub async fn federated_login(&self, input: &FederatedAuthInput) -> Result<AuthToken, RequestError> {
        let body = to_body(input, FEDERATED_LOGIN_FAILED)?;
        self.fetch(Method::Post, "/auth/federated".to_owned(), Some(body), FEDERATED_LOGIN_FAILED)
            .await
    }

    pub async fn update_password(&self, input: &UpdatePasswordInput) -> Result<(), RequestError> {
        let body = to_body(input, UPDATE_PASSWORD_FAILED)?;
        self.send(Method::Put, "/users/password".to_owned(), Some(body), UPDATE_PASSWORD_FAILED)
            .await
            .map(|_| ())
    }

    pub async fn list_boards(&self) -> Result<Vec<Board>, RequestError> {
        self.fetch(Method::Get, "/boards".to_owned(), None, LIST_BOARDS_FAILED).await
    }

    pub async fn get_board(&self, id: &str) -> Result<Board, RequestError> {
        self.fetch(Method::Get, format!("/boards/{id}"), None, GET_BOARD_FAILED).await
    }

    pub async fn get_public_board(&self, url: &str) -> Result<Board, RequestError> {
        self.fetch(Method::Get, format!("/public/boards/{url}"), None, GET_PUBLIC_BOARD_FAILED)
            .await
    }

    pub async fn create_board(&self, input: &CreateBoardInput) -> Result<Board, RequestError> {
        let body = to_body(input, CREATE_BOARD_FAILED)?;
        self.fetch(Method::Post, "/boards".to_owned(), Some(body), CREATE_BOARD_FAILED).await
    }

    pub async fn update_board(&self, id: &str, input: &UpdateBoardInput) -> Result<Board, RequestError> {
        let body = to_body(input, UPDATE_BOARD_FAILED)?;
        self.fetch(Method::Patch, format!("/boards/{id}"), Some(body), UPDATE_BOARD_FAILED).await
    }
}

fn to_body<B: Serialize>(input: &B, fallback: &str) -> Result<serde_json::Value, RequestError> {
    serde_json::to_value(input).map_err(|e| {
        log::warn!("failed to encode request body: {e}");
        RequestError::fallback(fallback)
    })
}
