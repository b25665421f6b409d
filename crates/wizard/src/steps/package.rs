//! Step 3: package and addon selection.
//!
//! Only packages whose guest range contains the party size are offered.
//! Addons belong to a package, so switching packages clears them.

use std::collections::BTreeSet;

use alps_core::booking::{BookingDraft, BookingPackage};
use alps_core::catalog::{self, Package};
use alps_core::pricing::PriceEstimate;
use alps_core::validation::{FieldErrors, MIN_ADULTS, MSG_PACKAGE_REQUIRED};
use serde::Serialize;

use super::{estimate_for, StepErrors};
use crate::state::{Wizard, WizardStep};

/// What the step can offer for the current party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PackageChoices {
    Available { packages: Vec<&'static Package> },
    /// Nothing fits; the visitor is pointed to the contact page instead.
    NoMatch { total_guests: u32, message: String },
}

pub fn choices(total_guests: u32) -> PackageChoices {
    let packages = catalog::packages_for_guests(total_guests);
    if packages.is_empty() {
        PackageChoices::NoMatch {
            total_guests,
            message: format!(
                "No packages are available for a group of {total_guests} guests. \
                 Please adjust your group size or contact us for a custom package."
            ),
        }
    } else {
        PackageChoices::Available { packages }
    }
}

/// In-progress selection on the Package step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection {
    total_guests: u32,
    package_id: Option<String>,
    addons: BTreeSet<String>,
}

impl PackageSelection {
    /// Start from whatever the draft already holds.
    pub fn from_draft(draft: &BookingDraft) -> Self {
        let total_guests = draft.total_guests().unwrap_or(MIN_ADULTS as u32);
        match &draft.package {
            Some(p) => Self {
                total_guests,
                package_id: Some(p.package_id.clone()),
                addons: p.addons.clone(),
            },
            None => Self {
                total_guests,
                package_id: None,
                addons: BTreeSet::new(),
            },
        }
    }

    pub fn total_guests(&self) -> u32 {
        self.total_guests
    }

    pub fn package_id(&self) -> Option<&str> {
        self.package_id.as_deref()
    }

    pub fn addons(&self) -> &BTreeSet<String> {
        &self.addons
    }

    pub fn choices(&self) -> PackageChoices {
        choices(self.total_guests)
    }

    pub fn package(&self) -> Option<&'static Package> {
        self.package_id.as_deref().and_then(catalog::find_package)
    }

    /// Select a package. Choosing a different one clears the addons.
    pub fn select(&mut self, package_id: &str) -> Result<&'static Package, FieldErrors> {
        let package = self.offered(package_id)?;
        if self.package_id.as_deref() != Some(package.id) {
            self.addons.clear();
            self.package_id = Some(package.id.to_string());
        }
        Ok(package)
    }

    /// Toggle an addon of the selected package; returns whether it is now selected.
    pub fn toggle_addon(&mut self, addon_id: &str) -> Result<bool, FieldErrors> {
        let mut errors = FieldErrors::new();
        let Some(package) = self.package() else {
            errors.add("packageId", MSG_PACKAGE_REQUIRED);
            return Err(errors);
        };
        if !package.has_addon(addon_id) {
            errors.add(
                "addons",
                format!("Addon '{addon_id}' is not available for package '{}'", package.id),
            );
            return Err(errors);
        }

        if self.addons.remove(addon_id) {
            Ok(false)
        } else {
            self.addons.insert(addon_id.to_string());
            Ok(true)
        }
    }

    /// The selection as a draft group, if a package is chosen.
    pub fn to_group(&self) -> Option<BookingPackage> {
        self.package_id.as_ref().map(|id| BookingPackage {
            package_id: id.clone(),
            addons: self.addons.clone(),
        })
    }

    pub fn estimate(&self) -> Option<PriceEstimate> {
        estimate_for(&self.to_group()?, self.total_guests)
    }

    /// A chosen package that fits the party, with valid addons.
    pub fn validate(&self) -> Result<BookingPackage, StepErrors> {
        let Some(group) = self.to_group() else {
            let mut errors = FieldErrors::new();
            errors.add("packageId", MSG_PACKAGE_REQUIRED);
            return Err(errors.into());
        };
        group.check()?;
        self.offered(&group.package_id)?;
        Ok(group)
    }

    fn offered(&self, package_id: &str) -> Result<&'static Package, FieldErrors> {
        let mut errors = FieldErrors::new();
        match catalog::find_package(package_id) {
            None => errors.add("packageId", format!("Unknown package '{package_id}'")),
            Some(p) if !p.fits(self.total_guests) => errors.add(
                "packageId",
                format!(
                    "{} is for {} to {} guests",
                    p.title, p.min_guests, p.max_guests
                ),
            ),
            Some(p) => return Ok(p),
        }
        Err(errors)
    }
}

/// Validate, store and move on to the Contact step.
pub fn complete(
    wizard: &mut Wizard,
    selection: &PackageSelection,
) -> Result<PriceEstimate, StepErrors> {
    let group = selection.validate()?;
    let estimate = estimate_for(&group, selection.total_guests).ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add("packageId", MSG_PACKAGE_REQUIRED);
        StepErrors::from(errors)
    })?;

    tracing::debug!(
        package_id = %group.package_id,
        addons = group.addons.len(),
        total_usd = estimate.total_usd,
        "Package step completed"
    );
    wizard.update_package(group);
    wizard.advance_past(WizardStep::Package);
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use alps_core::booking::BookingGuests;
    use alps_core::catalog::{FAMILY_SKI_WEEK, GROUP_SKI_SPA, LUXURY_CHALET_GOURMET};

    use super::*;

    fn draft_for(adults: i64, children: i64) -> BookingDraft {
        BookingDraft {
            guests: Some(BookingGuests::new(adults, children)),
            ..Default::default()
        }
    }

    fn offered_ids(choices: &PackageChoices) -> Vec<&'static str> {
        match choices {
            PackageChoices::Available { packages } => packages.iter().map(|p| p.id).collect(),
            PackageChoices::NoMatch { .. } => Vec::new(),
        }
    }

    #[test]
    fn only_fitting_packages_are_offered() {
        assert_eq!(
            offered_ids(&choices(2)),
            vec![FAMILY_SKI_WEEK, LUXURY_CHALET_GOURMET]
        );
        assert_eq!(
            offered_ids(&choices(9)),
            vec![GROUP_SKI_SPA, LUXURY_CHALET_GOURMET]
        );
        assert_eq!(offered_ids(&choices(12)), vec![GROUP_SKI_SPA]);
    }

    #[test]
    fn no_match_fallback() {
        for total in [1, 13, 40] {
            match choices(total) {
                PackageChoices::NoMatch { total_guests, message } => {
                    assert_eq!(total_guests, total);
                    assert!(message.contains("contact us"));
                }
                other => panic!("expected NoMatch for {total}, got {other:?}"),
            }
        }
    }

    #[test]
    fn selecting_unfit_package_is_refused() {
        let mut selection = PackageSelection::from_draft(&draft_for(2, 0));
        let errors = selection.select(GROUP_SKI_SPA).unwrap_err();
        assert!(errors.contains("packageId"));
        assert_eq!(selection.package_id(), None);
    }

    #[test]
    fn switching_package_clears_addons() {
        let mut selection = PackageSelection::from_draft(&draft_for(2, 2));
        selection.select(FAMILY_SKI_WEEK).unwrap();
        assert!(selection.toggle_addon("childcare").unwrap());
        assert!(selection.toggle_addon("private-lessons").unwrap());

        // Re-selecting the same package keeps them.
        selection.select(FAMILY_SKI_WEEK).unwrap();
        assert_eq!(selection.addons().len(), 2);

        selection.select(LUXURY_CHALET_GOURMET).unwrap();
        assert!(selection.addons().is_empty());
    }

    #[test]
    fn toggle_rules() {
        let mut selection = PackageSelection::from_draft(&draft_for(2, 0));
        assert!(selection.toggle_addon("childcare").is_err());

        selection.select(LUXURY_CHALET_GOURMET).unwrap();
        assert!(selection.toggle_addon("childcare").unwrap_err().contains("addons"));
        assert!(selection.toggle_addon("wine-cellar").unwrap());
        assert!(!selection.toggle_addon("wine-cellar").unwrap());
        assert!(selection.addons().is_empty());
    }

    #[test]
    fn estimate_is_per_guest() {
        let mut selection = PackageSelection::from_draft(&draft_for(3, 1));
        assert!(selection.estimate().is_none());

        selection.select(FAMILY_SKI_WEEK).unwrap();
        selection.toggle_addon("childcare").unwrap();
        let estimate = selection.estimate().unwrap();
        assert_eq!(estimate.total_usd, 3200 * 4 + 85 * 4);
    }

    #[test]
    fn complete_requires_selection() {
        let mut wizard = Wizard::new();
        let selection = PackageSelection::from_draft(&draft_for(2, 0));
        let errors = complete(&mut wizard, &selection).unwrap_err();
        assert_eq!(
            errors.fields.get("packageId").unwrap(),
            &[MSG_PACKAGE_REQUIRED.to_string()]
        );
        assert!(wizard.draft().package.is_none());
    }

    #[test]
    fn stale_selection_is_revalidated_against_party() {
        let mut stale = draft_for(2, 0);
        stale.package = Some(BookingPackage::new(GROUP_SKI_SPA));
        let selection = PackageSelection::from_draft(&stale);
        assert!(selection.validate().is_err());
    }
}
