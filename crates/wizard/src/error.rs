use alps_core::validation::FieldErrors;

use crate::gateway::GatewayError;
use crate::state::WizardStep;

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Step {0} does not exist")]
    NoSuchStep(u8),

    #[error("{target} step is locked; complete the earlier steps first")]
    StepLocked { target: WizardStep },

    #[error("{0} step is not complete")]
    Incomplete(WizardStep),

    #[error("Bookings can only be submitted from the review step")]
    NotOnReview,

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Booking is not ready to submit: {0}")]
    NotSubmittable(FieldErrors),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
