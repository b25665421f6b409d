//! Step components.
//!
//! Each module validates one step's input and, once it passes, hands the
//! validated group to the [`Wizard`](crate::Wizard) through a `complete`
//! function that also advances past the step.

pub mod contact;
pub mod dates;
pub mod guests;
pub mod package;
pub mod review;

use alps_core::booking::BookingPackage;
use alps_core::pricing::{self, PriceEstimate};
use alps_core::validation::FieldErrors;
use serde::Serialize;

/// Errors reported by a step.
///
/// `fields` are shown next to their inputs; `policy` is the grouped list of
/// cross-field business-rule violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepErrors {
    pub fields: FieldErrors,
    pub policy: Vec<String>,
}

impl StepErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.policy.is_empty()
    }

    pub(crate) fn into_result(self) -> Result<(), StepErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldErrors> for StepErrors {
    fn from(fields: FieldErrors) -> Self {
        Self {
            fields,
            policy: Vec::new(),
        }
    }
}

/// Price estimate for a package selection. Shared by the Package and Review
/// steps so both always show the same figures.
pub fn estimate_for(selection: &BookingPackage, total_guests: u32) -> Option<PriceEstimate> {
    let package = selection.package()?;
    Some(pricing::estimate(
        package,
        total_guests,
        selection.addons.iter().map(String::as_str),
    ))
}
