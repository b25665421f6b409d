//! Wizard state container.
//!
//! [`Wizard`] is a plain, serializable struct: the current step, the
//! accumulated [`BookingDraft`] and the in-flight flag. Steps hand validated
//! groups to the `update_*` reducers; navigation is `next`/`prev`/`go_to`.
//! Nothing here touches the network except [`Wizard::submit`], which
//! delegates to a [`SubmissionGateway`].

use std::fmt;

use alps_core::booking::{
    BookingContact, BookingDates, BookingDraft, BookingDraftRequest, BookingGuests,
    BookingPackage,
};
use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::gateway::{SubmissionGateway, SubmissionReceipt};

pub const MSG_SUBMITTED: &str =
    "Booking request submitted successfully! We will contact you within 24 hours.";
pub const MSG_SUBMIT_FAILED: &str =
    "Sorry, there was an error submitting your booking. Please try again.";

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WizardStep {
    Dates = 1,
    Guests = 2,
    Package = 3,
    Contact = 4,
    Review = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Dates,
        WizardStep::Guests,
        WizardStep::Package,
        WizardStep::Contact,
        WizardStep::Review,
    ];

    pub const FIRST: WizardStep = WizardStep::Dates;
    pub const LAST: WizardStep = WizardStep::Review;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dates => "Dates",
            Self::Guests => "Guests",
            Self::Package => "Package",
            Self::Contact => "Contact",
            Self::Review => "Review",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Dates => "When would you like to visit?",
            Self::Guests => "How many people are traveling?",
            Self::Package => "Choose your perfect package",
            Self::Contact => "Your contact information",
            Self::Review => "Confirm your booking request",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = WizardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or(WizardError::NoSuchStep(n))
    }
}

/// Navigation chrome entry for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
    pub current: bool,
    /// `go_to` would accept this step.
    pub reachable: bool,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wizard {
    current: WizardStep,
    draft: BookingDraft,
    #[serde(skip)]
    in_flight: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            current: WizardStep::FIRST,
            draft: BookingDraft::default(),
            in_flight: false,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether `step`'s data group is present. Review is never completed.
    pub fn is_completed(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Dates => self.draft.dates.is_some(),
            WizardStep::Guests => self.draft.guests.is_some(),
            WizardStep::Package => self.draft.package.is_some(),
            WizardStep::Contact => self.draft.contact.is_some(),
            WizardStep::Review => false,
        }
    }

    /// Number of the highest completed step, 0 when none is.
    pub fn highest_completed(&self) -> u8 {
        WizardStep::ALL
            .iter()
            .rev()
            .find(|s| self.is_completed(**s))
            .map_or(0, |s| s.number())
    }

    /// Completion percentage of the current position, 0 on Dates and 100 on Review.
    pub fn progress(&self) -> f64 {
        let last = f64::from(WizardStep::LAST.number() - 1);
        f64::from(self.current.number() - 1) / last * 100.0
    }

    pub fn steps(&self) -> Vec<StepStatus> {
        WizardStep::ALL
            .iter()
            .map(|&step| StepStatus {
                step,
                title: step.title(),
                description: step.description(),
                completed: self.is_completed(step),
                current: step == self.current,
                reachable: self.is_reachable(step),
            })
            .collect()
    }

    fn is_reachable(&self, step: WizardStep) -> bool {
        step.number() <= self.highest_completed() + 1
    }

    // -- Navigation ---------------------------------------------------------

    /// Advance one step. The current step's group must be present.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        if !self.is_completed(self.current) {
            return Err(WizardError::Incomplete(self.current));
        }
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        Ok(self.current)
    }

    /// Go back one step; stays put on the first step.
    pub fn prev(&mut self) -> WizardStep {
        if let Some(prev) = self.current.prev() {
            self.current = prev;
        }
        self.current
    }

    /// Jump to step `n`: any earlier step, or at most one past the highest
    /// completed step.
    pub fn go_to(&mut self, n: u8) -> Result<WizardStep, WizardError> {
        let target = WizardStep::try_from(n)?;
        if !self.is_reachable(target) {
            return Err(WizardError::StepLocked { target });
        }
        self.current = target;
        Ok(target)
    }

    /// Move past `step` if the wizard is still on it.
    pub(crate) fn advance_past(&mut self, step: WizardStep) {
        if self.current == step {
            if let Some(next) = step.next() {
                self.current = next;
            }
        }
    }

    // -- Reducers -----------------------------------------------------------

    pub fn update_dates(&mut self, dates: BookingDates) {
        self.draft.dates = Some(dates);
    }

    pub fn update_guests(&mut self, guests: BookingGuests) {
        self.draft.guests = Some(guests);
    }

    pub fn update_package(&mut self, package: BookingPackage) {
        self.draft.package = Some(package);
    }

    pub fn update_contact(&mut self, contact: BookingContact) {
        self.draft.contact = Some(contact);
    }

    /// Discard everything and start over on the first step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // -- Submission ---------------------------------------------------------

    /// Build the final request without changing any state.
    pub fn submission_request(&self) -> Result<BookingDraftRequest, WizardError> {
        if self.current != WizardStep::Review {
            return Err(WizardError::NotOnReview);
        }
        if self.in_flight {
            return Err(WizardError::InFlight);
        }
        if let Some(missing) = WizardStep::ALL[..4]
            .iter()
            .find(|s| !self.is_completed(**s))
        {
            return Err(WizardError::Incomplete(*missing));
        }
        self.draft.check().map_err(WizardError::NotSubmittable)?;
        Ok(BookingDraftRequest::final_submission(self.draft.clone()))
    }

    /// Claim the in-flight flag and return the request to send.
    ///
    /// Every successful call must be paired with [`Wizard::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<BookingDraftRequest, WizardError> {
        let request = self.submission_request()?;
        self.in_flight = true;
        Ok(request)
    }

    /// Release the in-flight flag. Success resets the wizard; failure keeps
    /// the draft so the visitor can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.in_flight = false;
        if succeeded {
            self.reset();
        }
    }

    /// Submit through `gateway`.
    pub async fn submit(
        &mut self,
        gateway: &dyn SubmissionGateway,
    ) -> Result<SubmissionReceipt, WizardError> {
        let request = self.begin_submit()?;
        let result = gateway.submit(&request).await;
        self.finish_submit(result.is_ok());

        match result {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                tracing::warn!(error = %e, "Booking submission failed, draft kept for retry");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alps_core::catalog::FAMILY_SKI_WEEK;
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::gateway::GatewayError;

    fn dates() -> BookingDates {
        BookingDates {
            start_date: "2027-01-10".into(),
            end_date: "2027-01-17".into(),
        }
    }

    fn contact() -> BookingContact {
        BookingContact {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            consent: true,
            ..Default::default()
        }
    }

    fn on_review() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.update_dates(dates());
        wizard.update_guests(BookingGuests::new(2, 1));
        wizard.update_package(BookingPackage::new(FAMILY_SKI_WEEK));
        wizard.update_contact(contact());
        wizard.go_to(5).unwrap();
        wizard
    }

    struct FakeGateway {
        accept: bool,
        calls: AtomicUsize,
    }

    impl FakeGateway {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SubmissionGateway for FakeGateway {
        async fn submit(
            &self,
            request: &BookingDraftRequest,
        ) -> Result<SubmissionReceipt, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(request.is_final());
            if self.accept {
                Ok(SubmissionReceipt {
                    draft_id: Some("draft_test".into()),
                    message: Some("ok".into()),
                })
            } else {
                Err(GatewayError::Rejected {
                    status: 500,
                    message: "Internal server error".into(),
                    errors: Default::default(),
                })
            }
        }
    }

    #[test]
    fn step_metadata() {
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(6), None);
        assert_eq!(WizardStep::from_number(3), Some(WizardStep::Package));
        assert_eq!(WizardStep::Guests.description(), "How many people are traveling?");
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Dates.prev(), None);
    }

    #[test]
    fn next_requires_current_group() {
        let mut wizard = Wizard::new();
        assert_matches!(wizard.next(), Err(WizardError::Incomplete(WizardStep::Dates)));

        wizard.update_dates(dates());
        assert_eq!(wizard.next().unwrap(), WizardStep::Guests);
        assert_matches!(wizard.next(), Err(WizardError::Incomplete(WizardStep::Guests)));
    }

    #[test]
    fn prev_is_unconditional_and_saturates() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.prev(), WizardStep::Dates);

        wizard.update_dates(dates());
        wizard.next().unwrap();
        assert_eq!(wizard.prev(), WizardStep::Dates);
    }

    #[test]
    fn go_to_respects_completion_frontier() {
        let mut wizard = Wizard::new();
        assert_matches!(wizard.go_to(0), Err(WizardError::NoSuchStep(0)));
        assert_matches!(wizard.go_to(6), Err(WizardError::NoSuchStep(6)));
        assert_matches!(
            wizard.go_to(2),
            Err(WizardError::StepLocked { target: WizardStep::Guests })
        );

        wizard.update_dates(dates());
        wizard.update_guests(BookingGuests::new(2, 0));
        assert_eq!(wizard.go_to(3).unwrap(), WizardStep::Package);
        assert_matches!(wizard.go_to(4), Err(WizardError::StepLocked { .. }));
        assert_eq!(wizard.go_to(1).unwrap(), WizardStep::Dates);
    }

    #[test]
    fn progress_and_step_statuses() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress(), 0.0);

        wizard.update_dates(dates());
        wizard.next().unwrap();
        assert_eq!(wizard.progress(), 25.0);

        let steps = wizard.steps();
        assert!(steps[0].completed);
        assert!(steps[1].current);
        assert!(steps[1].reachable);
        assert!(!steps[2].reachable);

        assert_eq!(on_review().progress(), 100.0);
    }

    #[test]
    fn revisiting_a_step_keeps_other_groups() {
        let mut wizard = on_review();
        wizard.go_to(2).unwrap();
        wizard.update_guests(BookingGuests::new(3, 0));

        assert!(wizard.draft().is_complete());
        assert_eq!(wizard.draft().total_guests(), Some(3));
    }

    #[test]
    fn submission_request_guards() {
        let mut wizard = on_review();
        wizard.go_to(4).unwrap();
        assert_matches!(wizard.submission_request(), Err(WizardError::NotOnReview));

        let mut partial = Wizard::new();
        partial.update_dates(dates());
        partial.current = WizardStep::Review;
        assert_matches!(
            partial.submission_request(),
            Err(WizardError::Incomplete(WizardStep::Guests))
        );

        let mut no_consent = on_review();
        no_consent.update_contact(BookingContact {
            consent: false,
            ..contact()
        });
        assert_matches!(
            no_consent.submission_request(),
            Err(WizardError::NotSubmittable(errors)) if errors.contains("contact.consent")
        );
    }

    #[test]
    fn in_flight_guard_blocks_second_submission() {
        let mut wizard = on_review();
        let request = wizard.begin_submit().unwrap();
        assert_eq!(request.step, 5);
        assert!(wizard.is_in_flight());
        assert_matches!(wizard.begin_submit(), Err(WizardError::InFlight));

        wizard.finish_submit(false);
        assert!(!wizard.is_in_flight());
        assert!(wizard.begin_submit().is_ok());
    }

    #[tokio::test]
    async fn successful_submit_resets() {
        let gateway = FakeGateway::new(true);
        let mut wizard = on_review();

        let receipt = wizard.submit(&gateway).await.unwrap();
        assert_eq!(receipt.draft_id.as_deref(), Some("draft_test"));
        assert_eq!(wizard, Wizard::new());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_submit_preserves_draft() {
        let gateway = FakeGateway::new(false);
        let mut wizard = on_review();
        let before = wizard.clone();

        assert_matches!(
            wizard.submit(&gateway).await,
            Err(WizardError::Gateway(GatewayError::Rejected { status: 500, .. }))
        );
        assert_eq!(wizard, before);
        assert!(!wizard.is_in_flight());

        // Retry is allowed.
        assert!(wizard.submit(&gateway).await.is_err());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn serializes_step_as_number() {
        let json = serde_json::to_value(on_review()).unwrap();
        assert_eq!(json["current"], 5);
        assert_eq!(json["draft"]["guests"]["adults"], 2);

        let back: Wizard = serde_json::from_value(json).unwrap();
        assert_eq!(back.current(), WizardStep::Review);
    }
}
