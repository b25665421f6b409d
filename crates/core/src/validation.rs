//! Field-keyed validation results.
//!
//! Rules are declared with `validator` derives on the wire DTOs; this module
//! turns [`validator::ValidationErrors`] into [`FieldErrors`], a stable,
//! serializable map of `camelCase field -> messages` that handlers and the
//! wizard can render next to the offending input.

use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_NAME: &str = "Name must be at least 2 characters";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_NOTES: &str = "Notes must be less than 500 characters";
pub const MSG_CONSENT: &str = "You must agree to be contacted";
pub const MSG_ADULTS_MIN: &str = "At least 1 adult required";
pub const MSG_ADULTS_MAX: &str = "Maximum 20 adults";
pub const MSG_CHILDREN_MIN: &str = "Children cannot be negative";
pub const MSG_CHILDREN_MAX: &str = "Maximum 20 children";
pub const MSG_START_REQUIRED: &str = "Start date is required";
pub const MSG_END_REQUIRED: &str = "End date is required";
pub const MSG_BAD_DATE: &str = "Invalid date, expected YYYY-MM-DD";
pub const MSG_END_AFTER_START: &str = "End date must be after start date";
pub const MSG_PACKAGE_REQUIRED: &str = "Please select a package";

/// Maximum accepted length (in characters) of free-text notes.
pub const MAX_NOTES_LEN: u64 = 500;

/// Guest count bounds shared by the guests group and the lead form.
pub const MIN_ADULTS: i64 = 1;
pub const MAX_ADULTS: i64 = 20;
pub const MIN_CHILDREN: i64 = 0;
pub const MAX_CHILDREN: i64 = 20;

// ---------------------------------------------------------------------------
// FieldErrors
// ---------------------------------------------------------------------------

/// Validation failures keyed by field name.
///
/// Keys are the camelCase wire names (`startDate`, `packageId`, ...). Nested
/// groups are prefixed with their group name, e.g. `contact.email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Absorb all errors from `other`.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Absorb all errors from `other`, prefixing each key with `group.`.
    pub fn merge_prefixed(&mut self, group: &str, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0
                .entry(format!("{group}.{field}"))
                .or_default()
                .extend(messages);
        }
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let key = camel_case(&field);
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {key}"));
                out.add(key.clone(), message);
            }
        }
        out
    }
}

/// Convert a Rust `snake_case` field name into its camelCase wire name.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Custom rules (referenced from `#[validate(custom(...))]`)
// ---------------------------------------------------------------------------

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Consent must be explicitly given; it is never coerced.
pub fn must_consent(consent: &bool) -> Result<(), ValidationError> {
    if *consent {
        Ok(())
    } else {
        Err(rule_error("consent", MSG_CONSENT))
    }
}

pub fn adults_in_range(adults: impl Borrow<i64>) -> Result<(), ValidationError> {
    let adults = adults.borrow();
    if *adults < MIN_ADULTS {
        Err(rule_error("range", MSG_ADULTS_MIN))
    } else if *adults > MAX_ADULTS {
        Err(rule_error("range", MSG_ADULTS_MAX))
    } else {
        Ok(())
    }
}

pub fn children_in_range(children: impl Borrow<i64>) -> Result<(), ValidationError> {
    let children = children.borrow();
    if *children < MIN_CHILDREN {
        Err(rule_error("range", MSG_CHILDREN_MIN))
    } else if *children > MAX_CHILDREN {
        Err(rule_error("range", MSG_CHILDREN_MAX))
    } else {
        Ok(())
    }
}
