//! JSON body extractor with the API's failure envelope.
//!
//! Axum's own [`Json`] rejects malformed or wrongly typed bodies with plain
//! text and a 400/415/422 status. [`JsonBody`] folds every rejection into an
//! [`AppError::Invalid`] so clients always get the JSON envelope and a 400.

use alps_core::validation::FieldErrors;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const MSG_BAD_BODY: &str = "Invalid request body";

/// Deserialized JSON request body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                let mut errors = FieldErrors::new();
                errors.add("body", rejection.body_text());
                Err(AppError::Invalid {
                    message: MSG_BAD_BODY,
                    errors,
                })
            }
        }
    }
}
