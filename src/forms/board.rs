//! Board create/update schemas.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::Serialize;

use super::rules::{BOARD_NAME_REQUIRED, is_non_empty};
use super::{Checks, FormInput, Schema, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateBoardInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial board update: absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBoardInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CreateBoardSchema;

impl Schema for CreateBoardSchema {
    type Output = CreateBoardInput;

    fn fields(&self) -> &'static [&'static str] {
        &["name", "description"]
    }

    fn validate(&self, input: &FormInput) -> Result<CreateBoardInput, ValidationError> {
        let name = input.get_or_empty("name");

        let mut checks = Checks::new();
        checks.require("name", is_non_empty(name), BOARD_NAME_REQUIRED);
        checks.finish(|| CreateBoardInput {
            name: name.to_owned(),
            description: input.get("description").map(str::to_owned),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateBoardSchema;

impl Schema for UpdateBoardSchema {
    type Output = UpdateBoardInput;

    fn fields(&self) -> &'static [&'static str] {
        &["name", "description"]
    }

    fn validate(&self, input: &FormInput) -> Result<UpdateBoardInput, ValidationError> {
        let name = input.get("name");

        let mut checks = Checks::new();
        checks.require("name", name.is_none_or(is_non_empty), BOARD_NAME_REQUIRED);
        checks.finish(|| UpdateBoardInput {
            name: name.map(str::to_owned),
            description: input.get("description").map(str::to_owned),
        })
    }
}
