//! Stay policy layered on top of the dates schema.
//!
//! The schema only checks that the range is well-formed. This module adds the
//! business rules the Dates step enforces before it lets the visitor
//! continue: no past start, 2..=21 nights, and a non-blocking advisory for
//! trips outside the ski season.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::booking::{parse_iso_date, BookingDates};
use crate::validation::{MSG_BAD_DATE, MSG_END_AFTER_START};

pub const MIN_NIGHTS: i64 = 2;
pub const MAX_NIGHTS: i64 = 21;

/// Stays of at least this many nights qualify for the weekly packages.
pub const WEEKLY_NIGHTS: i64 = 7;

pub const MSG_START_IN_PAST: &str = "Start date cannot be in the past";
pub const MSG_MIN_STAY: &str = "Minimum stay is 2 nights";
pub const MSG_MAX_STAY: &str = "Maximum stay is 21 nights";
pub const MSG_OFF_SEASON: &str = "Please note: Ski season is typically December through April";

/// Outcome of evaluating a date range against the stay policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayReport {
    /// Nights between start and end, when both dates parse.
    pub nights: Option<i64>,
    /// Blocking policy violations, in evaluation order.
    pub errors: Vec<String>,
    /// Non-blocking notices.
    pub advisories: Vec<String>,
    /// The stay is long enough for the weekly packages.
    pub weekly_value: bool,
}

impl StayReport {
    /// No blocking violations.
    pub fn is_acceptable(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Months (1-based) considered ski season.
fn in_season(date: NaiveDate) -> bool {
    matches!(date.month(), 12 | 1..=4)
}

/// Evaluate `dates` against the stay policy as of `today`.
pub fn check_stay(dates: &BookingDates, today: NaiveDate) -> StayReport {
    let mut report = StayReport::default();

    let (Some(start), Some(end)) = (
        parse_iso_date(&dates.start_date),
        parse_iso_date(&dates.end_date),
    ) else {
        report.errors.push(MSG_BAD_DATE.to_string());
        return report;
    };

    let nights = (end - start).num_days();
    report.nights = Some(nights);

    if start < today {
        report.errors.push(MSG_START_IN_PAST.to_string());
    }
    if end <= start {
        report.errors.push(MSG_END_AFTER_START.to_string());
    }
    if nights < MIN_NIGHTS {
        report.errors.push(MSG_MIN_STAY.to_string());
    }
    if nights > MAX_NIGHTS {
        report.errors.push(MSG_MAX_STAY.to_string());
    }
    if !in_season(start) || !in_season(end) {
        report.advisories.push(MSG_OFF_SEASON.to_string());
    }
    report.weekly_value = nights >= WEEKLY_NIGHTS;

    report
}
