//! Client-side booking wizard.
//!
//! - [`Wizard`]: the state container. Holds the accumulating
//!   [`BookingDraft`](alps_core::booking::BookingDraft), the current step and
//!   the in-flight submission guard.
//! - [`steps`]: one module per wizard step. Each validates its own input and
//!   hands the validated group back to the wizard.
//! - [`gateway`]: posts the final draft to the booking-draft endpoint.

pub mod error;
pub mod gateway;
pub mod state;
pub mod steps;

pub use error::WizardError;
pub use gateway::{GatewayError, HttpGateway, SubmissionGateway, SubmissionReceipt};
pub use state::{StepStatus, Wizard, WizardStep};
