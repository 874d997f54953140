//! Field-level validation rules for the user form.
//!
//! Evaluation is all-or-nothing from the caller's point of view: either the
//! values pass every rule, or the complete set of violated fields comes back
//! at once so the shell can surface them simultaneously.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::form::FormValues;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Required first name.
    FirstName,
    /// Optional last name; no rule applies.
    LastName,
    /// Required, shape-checked email address.
    Email,
    /// Required department label.
    Department,
}

/// A single violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: Field,
    /// Message the shell shows next to the field.
    pub message: &'static str,
}

/// The complete set of violated fields, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// One entry per violated field.
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Whether the given field is among the violations.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Evaluate every rule against the submitted values.
///
/// # Errors
///
/// Returns a [`ValidationFailure`] listing all violated fields:
/// - first name required (non-empty after trim),
/// - email required and matching a standard address shape,
/// - department required.
pub fn validate(values: &FormValues) -> Result<(), ValidationFailure> {
    let mut errors = Vec::new();

    if values.first_name.trim().is_empty() {
        errors.push(FieldError {
            field: Field::FirstName,
            message: "First Name is required",
        });
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            message: "Email is required",
        });
    } else if !email_regex().is_match(email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Invalid email format",
        });
    }

    if values.department.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Department,
            message: "Department is required",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { errors })
    }
}
