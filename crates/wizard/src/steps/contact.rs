//! Step 4: contact details and consent.

use alps_core::booking::BookingContact;

use super::StepErrors;
use crate::state::{Wizard, WizardStep};

/// The continue button is enabled only once consent is given.
pub fn can_continue(contact: &BookingContact) -> bool {
    contact.consent
}

/// Trim text inputs and drop optional fields left blank.
pub fn normalize(mut contact: BookingContact) -> BookingContact {
    contact.name = contact.name.trim().to_string();
    contact.email = contact.email.trim().to_string();
    contact.phone = contact
        .phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());
    contact.notes = contact
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    contact
}

pub fn validate(contact: &BookingContact) -> Result<(), StepErrors> {
    contact.check().map_err(StepErrors::from)
}

/// Normalize, validate, store and move on to the Review step.
pub fn complete(wizard: &mut Wizard, contact: BookingContact) -> Result<(), StepErrors> {
    let contact = normalize(contact);
    validate(&contact)?;
    wizard.update_contact(contact);
    wizard.advance_past(WizardStep::Contact);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alps_core::validation::{MSG_CONSENT, MSG_NOTES};

    use super::*;

    fn jane() -> BookingContact {
        BookingContact {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            consent: true,
            ..Default::default()
        }
    }

    #[test]
    fn consent_gates_continue() {
        assert!(can_continue(&jane()));
        let unchecked = BookingContact {
            consent: false,
            ..jane()
        };
        assert!(!can_continue(&unchecked));
        assert_eq!(
            validate(&unchecked).unwrap_err().fields.get("consent").unwrap(),
            &[MSG_CONSENT.to_string()]
        );
    }

    #[test]
    fn blank_optionals_become_none() {
        let contact = normalize(BookingContact {
            name: "  Jane Doe ".into(),
            phone: Some("   ".into()),
            notes: Some("".into()),
            ..jane()
        });
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.phone, None);
        assert_eq!(contact.notes, None);
    }

    #[test]
    fn long_notes_are_rejected() {
        let contact = BookingContact {
            notes: Some("x".repeat(501)),
            ..jane()
        };
        assert_eq!(
            validate(&contact).unwrap_err().fields.get("notes").unwrap(),
            &[MSG_NOTES.to_string()]
        );

        let at_limit = BookingContact {
            notes: Some("x".repeat(500)),
            ..jane()
        };
        assert!(validate(&at_limit).is_ok());
    }

    #[test]
    fn failed_contact_is_not_stored() {
        let mut wizard = Wizard::new();
        let bad = BookingContact {
            email: "nope".into(),
            ..jane()
        };
        assert!(complete(&mut wizard, bad).is_err());
        assert!(wizard.draft().contact.is_none());
    }
}
