//! Form input schemas and validation results.
//!
//! DESIGN
//! ======
//! Each form is a unit type implementing [`Schema`]. Validation never
//! short-circuits: every field rule runs, failures are collected in schema
//! definition order, and cross-field rules run afterwards regardless of the
//! single-field outcome. The result is either the typed payload the backend
//! expects or a [`ValidationError`] listing every problem at once.


pub mod auth;
pub mod binding;
pub mod board;
pub mod rules;

use std::collections::HashMap;

/// Raw user input for one form submission, keyed by field name.
///
/// A field that was never filled in is absent, which is distinct from a
/// field holding the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    values: HashMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and fixed payloads.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_owned(), value.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.values.remove(field);
    }

    /// The raw value, or `None` when the field is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// The raw value, with an absent field read as the empty string.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }
}

/// One failed constraint, attached to the field it concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every failed constraint of one validation run, in schema order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} field error(s): {}", .errors.len(), summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages attached to `field`, in rule order.
    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    /// First message attached to `field`, for single-line inline display.
    pub fn first_for(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A named set of field and cross-field constraints for one form.
pub trait Schema {
    /// Typed, constraint-satisfying payload produced on success.
    type Output;

    /// Field names in definition order.
    fn fields(&self) -> &'static [&'static str];

    /// Run every constraint against `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failed constraint.
    fn validate(&self, input: &FormInput) -> Result<Self::Output, ValidationError>;
}

/// Validate `input` against any schema chosen at the call site.
///
/// # Errors
///
/// Propagates the schema's [`ValidationError`].
pub fn validate<S: Schema>(schema: &S, input: &FormInput) -> Result<S::Output, ValidationError> {
    schema.validate(input)
}

/// Accumulates rule failures for a single validation run.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` unless `ok` holds.
    pub(crate) fn require(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok {
            self.errors.push(FieldError { field, message });
        }
    }

    /// Record every message in `failures` against `field`.
    pub(crate) fn extend(&mut self, field: &'static str, failures: impl IntoIterator<Item = &'static str>) {
        self.errors
            .extend(failures.into_iter().map(|message| FieldError { field, message }));
    }

    /// Yield `value` when nothing failed. `value` is built lazily so schemas
    /// only assemble their typed output after every rule has passed.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(ValidationError { errors: self.errors })
        }
    }
}
