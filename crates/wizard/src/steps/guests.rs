//! Step 2: party size, with non-binding package hints.

use alps_core::booking::BookingGuests;
use alps_core::catalog::{self, Package, FAMILY_SKI_WEEK, GROUP_SKI_SPA, LUXURY_CHALET_GOURMET};
use serde::Serialize;

use super::StepErrors;
use crate::state::{Wizard, WizardStep};

/// Guidance shown under the guest pickers. Never restricts the Package step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestHints {
    pub total_guests: u32,
    pub recommended: Vec<&'static Package>,
    pub accommodation_note: &'static str,
}

pub fn hints(guests: &BookingGuests) -> GuestHints {
    let total_guests = guests.total();
    GuestHints {
        total_guests,
        recommended: recommended_packages(guests),
        accommodation_note: accommodation_note(total_guests),
    }
}

pub fn recommended_packages(guests: &BookingGuests) -> Vec<&'static Package> {
    let ids: &[&str] = if guests.children > 0 {
        &[FAMILY_SKI_WEEK]
    } else if guests.total() >= 4 {
        &[GROUP_SKI_SPA, LUXURY_CHALET_GOURMET]
    } else {
        &[LUXURY_CHALET_GOURMET]
    };
    ids.iter().filter_map(|id| catalog::find_package(id)).collect()
}

pub fn accommodation_note(total_guests: u32) -> &'static str {
    match total_guests {
        0..=2 => "Perfect for romantic getaways or intimate experiences",
        3..=4 => "Ideal for small groups or families",
        5..=8 => "Great for larger families or friend groups",
        _ => "Perfect for large group celebrations or multi-family trips",
    }
}

pub fn validate(guests: &BookingGuests) -> Result<(), StepErrors> {
    guests.check().map_err(StepErrors::from)
}

/// Validate, store and move on to the Package step.
pub fn complete(wizard: &mut Wizard, guests: BookingGuests) -> Result<GuestHints, StepErrors> {
    validate(&guests)?;
    wizard.update_guests(guests);
    wizard.advance_past(WizardStep::Guests);
    Ok(hints(&guests))
}
