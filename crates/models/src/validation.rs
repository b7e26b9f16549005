//! Field-level validation producing a `field -> message` mapping.
//!
//! Rules are registered per field on a [`ValidationBuilder`]; every field that
//! breaks a rule ends up in the resulting [`FieldErrors`], keyed by its wire
//! (JSON) name. The first failing rule of a field wins.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Violations keyed by JSON field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Accumulates rule outcomes per field.
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: FieldErrors,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `rule` for `field`. The rule is skipped when the field already failed.
    pub fn check<F>(mut self, field: &str, rule: F) -> Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if self.errors.get(field).is_none() {
            if let Err(message) = rule() {
                self.errors.add(field, message);
            }
        }
        self
    }

    pub fn build(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Types that can check their own field constraints.
pub trait Validatable {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// `value` must be exactly `len` ASCII decimal digits.
pub fn validate_digits(value: &str, len: usize, message: &str) -> Result<(), String> {
    if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
