//! Lead intake: the contact form schema and lead derivation.
//!
//! A lead is created either from a direct contact-form submission
//! ([`LeadForm`]) or from a completed booking draft
//! ([`NewLead::from_booking`]). Both paths produce a [`NewLead`], which the
//! store turns into an immutable record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::booking::{parse_iso_date, BookingDraft};
use crate::catalog;
use crate::error::CoreError;
use crate::validation::{must_consent, FieldErrors, MSG_BAD_DATE, MSG_END_AFTER_START};

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Where a lead originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    #[default]
    Website,
    Agents,
    Referral,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Agents => "agents",
            Self::Referral => "referral",
        }
    }
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

/// Body of `POST /lead`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 20, message = "Adults must be between 1 and 20"))]
    pub adults: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0, max = 20, message = "Children must be between 0 and 20"))]
    pub children: Option<i64>,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500, message = "Notes must be less than 500 characters"))]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: LeadSource,
    #[serde(default)]
    #[validate(custom(function = "must_consent"))]
    pub consent: bool,
}

impl LeadForm {
    /// Contact rules plus the optional trip fields.
    ///
    /// Trip dates, when given, must parse and be correctly ordered; a package
    /// id, when given, must exist in the catalog.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        let start = self
            .start_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_iso_date);
        let end = self
            .end_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_iso_date);

        if let Some(None) = start {
            errors.add("startDate", MSG_BAD_DATE);
        }
        if let Some(None) = end {
            errors.add("endDate", MSG_BAD_DATE);
        }
        if let (Some(Some(start)), Some(Some(end))) = (start, end) {
            if end <= start {
                errors.add("endDate", MSG_END_AFTER_START);
            }
        }

        if let Some(id) = self.package_id.as_deref().filter(|s| !s.is_empty()) {
            if catalog::find_package(id).is_none() {
                errors.add("packageId", format!("Unknown package '{id}'"));
            }
        }

        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// NewLead
// ---------------------------------------------------------------------------

/// A validated lead ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub adults: Option<i64>,
    pub children: Option<i64>,
    pub package_id: Option<String>,
    pub notes: Option<String>,
    pub source: LeadSource,
}

impl From<LeadForm> for NewLead {
    fn from(form: LeadForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            start_date: form.start_date,
            end_date: form.end_date,
            adults: form.adults,
            children: form.children,
            package_id: form.package_id,
            notes: form.notes,
            source: form.source,
        }
    }
}

impl NewLead {
    /// Derive a lead from a final booking draft.
    ///
    /// Requires the contact group with consent given. Trip fields are copied
    /// from whichever groups are present; the notes summarise the addon
    /// selection and the visitor's remarks.
    pub fn from_booking(draft: &BookingDraft) -> Result<Self, CoreError> {
        let contact = draft.contact.as_ref().ok_or_else(|| {
            CoreError::Validation("Booking draft has no contact details".to_string())
        })?;
        if !contact.consent {
            return Err(CoreError::Validation(
                "Cannot create a lead without consent".to_string(),
            ));
        }

        Ok(Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            start_date: draft.dates.as_ref().map(|d| d.start_date.clone()),
            end_date: draft.dates.as_ref().map(|d| d.end_date.clone()),
            adults: draft.guests.map(|g| g.adults),
            children: draft.guests.map(|g| g.children),
            package_id: draft.package.as_ref().map(|p| p.package_id.clone()),
            notes: Some(booking_notes(draft)),
            source: LeadSource::Website,
        })
    }
}

/// Summary line stored in a wizard-derived lead's notes.
pub fn booking_notes(draft: &BookingDraft) -> String {
    let addons = draft
        .package
        .as_ref()
        .filter(|p| !p.addons.is_empty())
        .map(|p| p.addons.iter().cloned().collect::<Vec<_>>().join(", "))
        .unwrap_or_else(|| "None".to_string());
    let remarks = draft
        .contact
        .as_ref()
        .and_then(|c| c.notes.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("None");

    format!(
        "Booking request via wizard. Selected addons: {addons}. Additional notes: {remarks}"
    )
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::booking::{BookingContact, BookingDates, BookingGuests, BookingPackage};
    use crate::validation::{MSG_CONSENT, MSG_EMAIL, MSG_NAME};

    fn form() -> LeadForm {
        serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "consent": true
        }))
        .unwrap()
    }

    fn complete_draft() -> BookingDraft {
        let mut package = BookingPackage::new(catalog::FAMILY_SKI_WEEK);
        package.addons.insert("private-lessons".into());
        package.addons.insert("childcare".into());
        BookingDraft {
            dates: Some(BookingDates {
                start_date: "2027-01-10".into(),
                end_date: "2027-01-17".into(),
            }),
            guests: Some(BookingGuests::new(2, 2)),
            package: Some(package),
            contact: Some(BookingContact {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: Some("+1 555 0100".into()),
                notes: Some("Ground floor please".into()),
                consent: true,
            }),
        }
    }

    #[test]
    fn minimal_form_is_valid_and_defaults_to_website() {
        let form = form();
        assert!(form.check().is_ok());
        assert_eq!(form.source, LeadSource::Website);
    }

    #[test]
    fn form_field_errors() {
        let bad = LeadForm {
            name: "J".into(),
            email: "not-an-email".into(),
            ..form()
        };
        let errors = bad.check().unwrap_err();
        assert_eq!(errors.get("name").unwrap(), &[MSG_NAME.to_string()]);
        assert_eq!(errors.get("email").unwrap(), &[MSG_EMAIL.to_string()]);
    }

    #[test]
    fn form_requires_consent() {
        let bad = LeadForm { consent: false, ..form() };
        assert_eq!(
            bad.check().unwrap_err().get("consent").unwrap(),
            &[MSG_CONSENT.to_string()]
        );
    }

    #[test]
    fn form_checks_optional_trip_fields() {
        let bad = LeadForm {
            adults: Some(0),
            children: Some(21),
            start_date: Some("2027-02-10".into()),
            end_date: Some("2027-02-01".into()),
            package_id: Some("unknown".into()),
            ..form()
        };
        let errors = bad.check().unwrap_err();
        assert!(errors.contains("adults"));
        assert!(errors.contains("children"));
        assert!(errors.contains("endDate"));
        assert!(errors.contains("packageId"));
    }

    #[test]
    fn source_parses_lowercase() {
        let form: LeadForm = serde_json::from_value(serde_json::json!({
            "name": "Agent Smith",
            "email": "agent@example.com",
            "source": "agents",
            "consent": true
        }))
        .unwrap();
        assert_eq!(form.source, LeadSource::Agents);
        assert_eq!(form.source.as_str(), "agents");

        let unknown = serde_json::from_value::<LeadForm>(serde_json::json!({
            "name": "X Y",
            "email": "x@example.com",
            "source": "billboard",
            "consent": true
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn lead_from_booking_mirrors_draft() {
        let draft = complete_draft();
        let lead = NewLead::from_booking(&draft).unwrap();
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(lead.adults, Some(2));
        assert_eq!(lead.children, Some(2));
        assert_eq!(lead.package_id.as_deref(), Some(catalog::FAMILY_SKI_WEEK));
        assert_eq!(lead.start_date.as_deref(), Some("2027-01-10"));
        assert_eq!(lead.source, LeadSource::Website);
        assert_eq!(
            lead.notes.as_deref(),
            Some(
                "Booking request via wizard. Selected addons: childcare, private-lessons. \
                 Additional notes: Ground floor please"
            )
        );
    }

    #[test]
    fn notes_fall_back_to_none() {
        let mut draft = complete_draft();
        draft.package.as_mut().unwrap().addons.clear();
        draft.contact.as_mut().unwrap().notes = None;
        assert_eq!(
            booking_notes(&draft),
            "Booking request via wizard. Selected addons: None. Additional notes: None"
        );
    }

    #[test]
    fn lead_from_booking_requires_consented_contact() {
        let mut draft = complete_draft();
        draft.contact.as_mut().unwrap().consent = false;
        assert_matches!(NewLead::from_booking(&draft), Err(CoreError::Validation(_)));

        draft.contact = None;
        assert_matches!(NewLead::from_booking(&draft), Err(CoreError::Validation(_)));
    }
}
