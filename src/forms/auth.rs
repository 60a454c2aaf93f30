//! Schemas for the sign-in, sign-up, provider sign-in and password forms.
//!
//! The typed outputs double as request bodies, so they serialize with the
//! backend's camelCase field names.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;

use super::rules::{
    INVALID_EMAIL, INVALID_URL, NAME_REQUIRED, PASSWORD_REQUIRED, PASSWORDS_DONT_MATCH, is_email, is_non_empty,
    is_url, password_strength_failures,
};
use super::{Checks, FormInput, Schema, ValidationError};

/// Validated `/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Validated `/auth/signup` body. `token` carries a workspace invitation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupInput {
    pub email: String,
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Validated identity handed over by an external sign-in provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FederatedAuthInput {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Validated password change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordInput {
    pub new_password: String,
    pub confirm_new_password: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoginSchema;

impl Schema for LoginSchema {
    type Output = LoginInput;

    fn fields(&self) -> &'static [&'static str] {
        &["email", "password"]
    }

    fn validate(&self, input: &FormInput) -> Result<LoginInput, ValidationError> {
        let email = input.get_or_empty("email");
        let password = input.get_or_empty("password");

        let mut checks = Checks::new();
        checks.require("email", is_email(email), INVALID_EMAIL);
        checks.require("password", is_non_empty(password), PASSWORD_REQUIRED);
        checks.finish(|| LoginInput {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SignupSchema;

impl Schema for SignupSchema {
    type Output = SignupInput;

    fn fields(&self) -> &'static [&'static str] {
        &["email", "name", "password", "token"]
    }

    fn validate(&self, input: &FormInput) -> Result<SignupInput, ValidationError> {
        let email = input.get_or_empty("email");
        let name = input.get_or_empty("name");
        let password = input.get_or_empty("password");

        let mut checks = Checks::new();
        checks.require("email", is_email(email), INVALID_EMAIL);
        checks.require("name", is_non_empty(name), NAME_REQUIRED);
        checks.require("password", is_non_empty(password), PASSWORD_REQUIRED);
        checks.finish(|| SignupInput {
            email: email.to_owned(),
            name: name.to_owned(),
            password: password.to_owned(),
            token: input.get("token").map(str::to_owned),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FederatedAuthSchema;

impl Schema for FederatedAuthSchema {
    type Output = FederatedAuthInput;

    fn fields(&self) -> &'static [&'static str] {
        &["email", "name", "picture", "token"]
    }

    fn validate(&self, input: &FormInput) -> Result<FederatedAuthInput, ValidationError> {
        let email = input.get_or_empty("email");
        let name = input.get_or_empty("name");
        let picture = input.get("picture");

        let mut checks = Checks::new();
        checks.require("email", is_email(email), INVALID_EMAIL);
        checks.require("name", is_non_empty(name), NAME_REQUIRED);
        checks.require("picture", picture.is_none_or(is_url), INVALID_URL);
        checks.finish(|| FederatedAuthInput {
            email: email.to_owned(),
            name: name.to_owned(),
            picture: picture.map(str::to_owned),
            token: input.get("token").map(str::to_owned),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UpdatePasswordSchema;

impl Schema for UpdatePasswordSchema {
    type Output = UpdatePasswordInput;

    fn fields(&self) -> &'static [&'static str] {
        &["newPassword", "confirmNewPassword"]
    }

    fn validate(&self, input: &FormInput) -> Result<UpdatePasswordInput, ValidationError> {
        let new_password = input.get_or_empty("newPassword");
        let confirm = input.get_or_empty("confirmNewPassword");

        let mut checks = Checks::new();
        checks.extend("newPassword", password_strength_failures(new_password));
        // Runs even when the new password itself failed.
        checks.require("confirmNewPassword", confirm == new_password, PASSWORDS_DONT_MATCH);
        checks.finish(|| UpdatePasswordInput {
            new_password: new_password.to_owned(),
            confirm_new_password: confirm.to_owned(),
        })
    }
}
