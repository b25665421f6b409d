//! Booking draft data groups and their schemas.
//!
//! A [`BookingDraft`] accumulates four groups, each filled in by exactly one
//! wizard step. Every group validates its own shape through `check()`, which
//! returns field-keyed errors instead of failing fast.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog;
use crate::stay_policy::MSG_START_IN_PAST;
use crate::validation::{
    adults_in_range, children_in_range, must_consent, FieldErrors, MSG_BAD_DATE,
    MSG_END_AFTER_START,
};

/// First wizard step (1-based).
pub const MIN_STEP: i64 = 1;

/// The review step; a draft posted with this step is final.
pub const FINAL_STEP: i64 = 5;

/// Parse an ISO `YYYY-MM-DD` date. RFC 3339 timestamps are accepted and
/// truncated to their date part.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingDates {
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
}

impl BookingDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        }
    }

    /// Both dates parsed, or `None` if either is malformed.
    pub fn parsed(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((parse_iso_date(&self.start_date)?, parse_iso_date(&self.end_date)?))
    }

    /// Nights between start and end (negative when reversed).
    pub fn nights(&self) -> Option<i64> {
        self.parsed().map(|(start, end)| (end - start).num_days())
    }

    /// Shape check: both present, both ISO dates, end strictly after start.
    pub fn check(&self) -> Result<(), FieldErrors> {
        if let Err(e) = self.validate() {
            return Err(e.into());
        }

        let mut errors = FieldErrors::new();
        let start = parse_iso_date(&self.start_date);
        let end = parse_iso_date(&self.end_date);
        if start.is_none() {
            errors.add("startDate", MSG_BAD_DATE);
        }
        if end.is_none() {
            errors.add("endDate", MSG_BAD_DATE);
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add("endDate", MSG_END_AFTER_START);
            }
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Guests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingGuests {
    #[validate(custom(function = "adults_in_range"))]
    pub adults: i64,
    #[serde(default)]
    #[validate(custom(function = "children_in_range"))]
    pub children: i64,
}

impl BookingGuests {
    pub fn new(adults: i64, children: i64) -> Self {
        Self { adults, children }
    }

    /// Adults plus children, clamping negative counts to zero.
    pub fn total(&self) -> u32 {
        let total = self.adults.max(0).saturating_add(self.children.max(0));
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

// ---------------------------------------------------------------------------
// Package
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingPackage {
    #[validate(length(min = 1, message = "Please select a package"))]
    pub package_id: String,
    #[serde(default)]
    pub addons: BTreeSet<String>,
}

impl BookingPackage {
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            addons: BTreeSet::new(),
        }
    }

    pub fn package(&self) -> Option<&'static catalog::Package> {
        catalog::find_package(&self.package_id)
    }

    /// Shape check plus catalog references: the package must exist and every
    /// addon must belong to it.
    pub fn check(&self) -> Result<(), FieldErrors> {
        if let Err(e) = self.validate() {
            return Err(e.into());
        }

        let mut errors = FieldErrors::new();
        match self.package() {
            None => errors.add("packageId", format!("Unknown package '{}'", self.package_id)),
            Some(package) => {
                for addon in self.addons.iter().filter(|a| !package.has_addon(a)) {
                    errors.add(
                        "addons",
                        format!(
                            "Addon '{addon}' is not available for package '{}'",
                            package.id
                        ),
                    );
                }
            }
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingContact {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Notes must be less than 500 characters"))]
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "must_consent"))]
    pub consent: bool,
}

impl BookingContact {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Accumulated wizard state. Each group is `None` until its step completes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<BookingDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<BookingGuests>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<BookingPackage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<BookingContact>,
}

impl BookingDraft {
    /// All four groups are present.
    pub fn is_complete(&self) -> bool {
        self.dates.is_some()
            && self.guests.is_some()
            && self.package.is_some()
            && self.contact.is_some()
    }

    pub fn total_guests(&self) -> Option<u32> {
        self.guests.map(|g| g.total())
    }

    /// Validate every present group, prefixing keys with the group name.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(Err(e)) = self.dates.as_ref().map(BookingDates::check) {
            errors.merge_prefixed("dates", e);
        }
        if let Some(Err(e)) = self.guests.as_ref().map(BookingGuests::check) {
            errors.merge_prefixed("guests", e);
        }
        if let Some(Err(e)) = self.package.as_ref().map(BookingPackage::check) {
            errors.merge_prefixed("package", e);
        }
        if let Some(Err(e)) = self.contact.as_ref().map(BookingContact::check) {
            errors.merge_prefixed("contact", e);
        }
        errors.into_result()
    }

    /// Complete and every group individually valid.
    pub fn is_submittable(&self) -> bool {
        self.is_complete() && self.check().is_ok()
    }
}

/// Body of `POST /booking-draft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraftRequest {
    pub step: i64,
    #[serde(default)]
    pub payload: BookingDraft,
}

impl BookingDraftRequest {
    /// A final submission of the given draft.
    pub fn final_submission(payload: BookingDraft) -> Self {
        Self {
            step: FINAL_STEP,
            payload,
        }
    }

    pub fn is_final(&self) -> bool {
        self.step == FINAL_STEP
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !(MIN_STEP..=FINAL_STEP).contains(&self.step) {
            errors.add(
                "step",
                format!("Step must be between {MIN_STEP} and {FINAL_STEP}"),
            );
        }
        if let Err(e) = self.payload.check() {
            errors.merge_prefixed("payload", e);
        }
        errors.into_result()
    }

    /// [`check`](Self::check), and a final submission may not start before
    /// `today`.
    pub fn check_as_of(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = self.check().err().unwrap_or_default();
        let start = self
            .payload
            .dates
            .as_ref()
            .and_then(|d| parse_iso_date(&d.start_date));
        if self.is_final() && start.is_some_and(|start| start < today) {
            errors.add("payload.dates.startDate", MSG_START_IN_PAST);
        }
        errors.into_result()
    }
}
