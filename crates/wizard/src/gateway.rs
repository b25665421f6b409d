//! Submission of the final booking draft.
//!
//! [`SubmissionGateway`] is the seam between the wizard and the network.
//! [`HttpGateway`] posts to `{base}/api/booking-draft`; tests substitute
//! in-memory implementations.

use alps_core::booking::BookingDraftRequest;
use alps_core::validation::FieldErrors;
use async_trait::async_trait;
use serde::Deserialize;

/// Path of the booking-draft endpoint, relative to the site root.
pub const BOOKING_DRAFT_PATH: &str = "/api/booking-draft";

/// Default site root when `SITE_URL` is unset.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (network, DNS, refused, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// Field errors are kept for diagnostics; the wizard reports the failure
    /// as a whole and does not map them back onto step inputs.
    #[error("Submission rejected with HTTP {status}: {message}")]
    Rejected {
        status: u16,
        message: String,
        errors: FieldErrors,
    },
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// Server acknowledgement of a stored draft.
///
/// Any 2xx status means the draft was stored. The fields are filled from the
/// response body when it is readable and left empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub draft_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver `request` and report whether the server accepted it.
    async fn submit(&self, request: &BookingDraftRequest)
        -> Result<SubmissionReceipt, GatewayError>;
}

/// Failure envelope returned by the API.
#[derive(Debug, Default, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: FieldErrors,
}

/// Posts booking drafts to the lead-intake API over HTTP.
///
/// Uses the HTTP client's default timeout; a submission in flight cannot be
/// cancelled.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// Gateway for the site rooted at `base_url` (e.g. `https://example.com`).
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{base}{BOOKING_DRAFT_PATH}"),
        }
    }

    /// Gateway for the site named by `SITE_URL` (default: `http://localhost:3000`).
    pub fn from_env() -> Self {
        let base = std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.into());
        Self::new(base)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(
        &self,
        request: &BookingDraftRequest,
    ) -> Result<SubmissionReceipt, GatewayError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: FailureBody = response.json().await.unwrap_or_default();
            let message = body.message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                %message,
                "Booking submission rejected"
            );
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
                errors: body.errors,
            });
        }

        let receipt = match response.json::<SubmissionReceipt>().await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    status = status.as_u16(),
                    error = %e,
                    "Booking accepted with an unreadable response body"
                );
                SubmissionReceipt::default()
            }
        };
        tracing::info!(draft_id = ?receipt.draft_id, "Booking submitted");
        Ok(receipt)
    }
}
