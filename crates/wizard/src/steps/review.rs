//! Step 5: read-only summary and submission.

use alps_core::booking::{BookingContact, BookingDates, BookingGuests};
use alps_core::catalog::{Addon, Package};
use alps_core::pricing::PriceEstimate;
use serde::Serialize;

use super::estimate_for;
use crate::state::Wizard;

pub const ESTIMATE_DISCLAIMER: &str = "This is an estimate only. Final pricing depends on your \
     specific dates, accommodation availability, and any customizations you request.";

/// Everything the Review step displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub dates: BookingDates,
    pub nights: Option<i64>,
    pub guests: BookingGuests,
    pub total_guests: u32,
    pub package: &'static Package,
    pub addons: Vec<&'static Addon>,
    pub contact: BookingContact,
    pub estimate: PriceEstimate,
}

/// Summary of a complete draft; `None` while any group is missing or the
/// package id is unknown.
pub fn summary(wizard: &Wizard) -> Option<ReviewSummary> {
    let draft = wizard.draft();
    let dates = draft.dates.clone()?;
    let guests = draft.guests?;
    let selection = draft.package.as_ref()?;
    let contact = draft.contact.clone()?;

    let package = selection.package()?;
    let total_guests = guests.total();
    let estimate = estimate_for(selection, total_guests)?;
    let addons = package
        .addons
        .iter()
        .filter(|a| selection.addons.contains(a.id))
        .collect();

    Some(ReviewSummary {
        nights: dates.nights(),
        dates,
        guests,
        total_guests,
        package,
        addons,
        contact,
        estimate,
    })
}

/// Submit is enabled for a complete, valid draft with consent, while no
/// submission is in flight.
pub fn can_submit(wizard: &Wizard) -> bool {
    let draft = wizard.draft();
    !wizard.is_in_flight()
        && draft.contact.as_ref().is_some_and(|c| c.consent)
        && draft.is_submittable()
}
