//! Step 1: travel dates.
//!
//! Schema rules come from [`BookingDates::check`]; the stay policy
//! ([`check_stay`]) is applied on top once the schema passes, so a reversed
//! range is reported once, next to the end date.

use alps_core::booking::BookingDates;
use alps_core::stay_policy::{check_stay, StayReport};
use chrono::NaiveDate;

use super::StepErrors;
use crate::state::{Wizard, WizardStep};

pub const MSG_WEEKLY_VALUE: &str = "Great choice! Week-long stays offer the best value with our packages.";

/// Validate `dates` as of `today`.
///
/// On success the returned report carries the night count, any non-blocking
/// advisories and the weekly-value flag.
pub fn validate(dates: &BookingDates, today: NaiveDate) -> Result<StayReport, StepErrors> {
    if let Err(fields) = dates.check() {
        return Err(fields.into());
    }

    let report = check_stay(dates, today);
    if !report.is_acceptable() {
        return Err(StepErrors {
            policy: report.errors,
            ..Default::default()
        });
    }
    Ok(report)
}

/// Validate, store and move on to the Guests step.
pub fn complete(
    wizard: &mut Wizard,
    dates: BookingDates,
    today: NaiveDate,
) -> Result<StayReport, StepErrors> {
    let report = validate(&dates, today)?;
    tracing::debug!(nights = ?report.nights, "Dates step completed");
    wizard.update_dates(dates);
    wizard.advance_past(WizardStep::Dates);
    Ok(report)
}

/// Non-blocking notices to display alongside a valid range.
pub fn notices(report: &StayReport) -> Vec<&str> {
    let mut notices: Vec<&str> = report.advisories.iter().map(String::as_str).collect();
    if report.weekly_value {
        notices.push(MSG_WEEKLY_VALUE);
    }
    notices
}
