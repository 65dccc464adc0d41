use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// Collects one message per violated rule across every field, so a payload
/// missing several values reports all of them at once.
fn collect_error_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

/// JSON extractor that runs `validator` rules and rejects with the
/// `{"errors": [...]}` body the API promises for validation failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.body_text().contains("invalid type") {
                    return AppError::validation(vec![
                        "Invalid field type in request".to_string(),
                    ]);
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::validation(vec![
                        "Missing 'Content-Type: application/json' header".to_string(),
                    ]);
                }

                AppError::validation(vec!["Invalid request body".to_string()])
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(collect_error_messages(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
