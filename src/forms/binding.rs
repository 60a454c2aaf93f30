//! Validate-on-blur form state, generic over the form's schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages keep one `FormBinding` per form inside an `RwSignal`. Inputs write
//! raw values with `set`, leave a field with `blur`, and submit with
//! `submit`. Errors surface only for fields the user has already left so an
//! untouched form does not open covered in red.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::collections::HashSet;

use super::{FormInput, Schema, ValidationError};

#[derive(Clone, Debug)]
pub struct FormBinding<S> {
    schema: S,
    input: FormInput,
    touched: HashSet<&'static str>,
    error: Option<ValidationError>,
}

impl<S: Schema> FormBinding<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            input: FormInput::new(),
            touched: HashSet::new(),
            error: None,
        }
    }

    /// Current raw value of `field`, empty when unset.
    pub fn value(&self, field: &str) -> &str {
        self.input.get_or_empty(field)
    }

    /// Store a raw value. Fields already shown as invalid revalidate on
    /// each keystroke so the message clears as soon as it is fixed.
    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.input.set(field, value);
        if self.touched.contains(field) {
            self.revalidate();
        }
    }

    /// Clear a field back to absent, e.g. an optional field emptied by the user.
    pub fn unset(&mut self, field: &'static str) {
        self.input.remove(field);
        if self.touched.contains(field) {
            self.revalidate();
        }
    }

    /// Mark `field` as visited and revalidate the whole form.
    pub fn blur(&mut self, field: &'static str) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// First visible error for `field`, if it has been touched.
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.error.as_ref().and_then(|e| e.first_for(field))
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Touch every schema field and validate.
    ///
    /// # Errors
    ///
    /// Returns the schema's [`ValidationError`]; it is also kept so every
    /// field's message becomes visible.
    pub fn submit(&mut self) -> Result<S::Output, ValidationError> {
        self.touched.extend(self.schema.fields().iter().copied());
        let result = self.schema.validate(&self.input);
        self.error = result.as_ref().err().cloned();
        result
    }

    /// Forget input, touched fields and errors.
    pub fn reset(&mut self) {
        self.input = FormInput::new();
        self.touched.clear();
        self.error = None;
    }

    fn revalidate(&mut self) {
        self.error = self.schema.validate(&self.input).err();
    }
}
