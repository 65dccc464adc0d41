use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use data_encoding::BASE64;
use sqlx::SqlitePool;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::password::verify_password;

/// Request-scoped credentials parsed from a Basic Authorization header.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Why authentication failed. This classification exists for server logs
/// only; every variant maps to the same external 401 response so clients
/// cannot probe which emails exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// No parseable Basic credentials on the request.
    NoCredentials,
    /// No user record matches the presented email.
    UserNotFound(String),
    /// Digest comparison failed for an existing user.
    BadPassword(String),
}

/// Outcome of authenticating a request: the identity, or the reason it was
/// denied. Store faults are reported separately by [`authenticate`].
pub type AuthResult = Result<User, DenialReason>;

/// Decodes `Basic <base64(email:password)>` into credentials.
///
/// Missing header, wrong scheme, undecodable base64, non-UTF-8 payload, and
/// a missing `:` separator are all treated as "no credentials" rather than
/// errors. The password may itself contain `:`; only the first separator
/// splits.
pub fn parse_basic_credentials(header_value: Option<&str>) -> Option<Credentials> {
    let encoded = header_value?.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim().as_bytes()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (email, password) = decoded.split_once(':')?;
    Some(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Authenticates a raw Authorization header value against the user store.
///
/// Lookup is a case-sensitive exact match on email. The outer `Result`
/// carries store faults; the inner [`AuthResult`] carries the
/// authentication outcome.
pub async fn authenticate(
    db: &SqlitePool,
    header_value: Option<&str>,
) -> Result<AuthResult, AppError> {
    let Some(credentials) = parse_basic_credentials(header_value) else {
        return Ok(Err(DenialReason::NoCredentials));
    };

    let Some(record) = UserService::find_by_email_with_password(db, &credentials.email).await?
    else {
        return Ok(Err(DenialReason::UserNotFound(credentials.email)));
    };

    if !verify_password(&credentials.password, &record.password)? {
        return Ok(Err(DenialReason::BadPassword(credentials.email)));
    }

    Ok(Ok(record.into_user()))
}

/// Extractor that authenticates the request and provides the caller's user
/// record. Handlers receive the identity as a typed value; nothing is
/// attached to the request itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match authenticate(&state.db, header_value).await? {
            Ok(user) => {
                tracing::debug!(email = %user.email_address, "authentication successful");
                Ok(AuthUser(user))
            }
            Err(reason) => {
                // The reason stays server-side; the response is uniform.
                tracing::warn!(reason = ?reason, "authentication denied");
                Err(AppError::unauthorized())
            }
        }
    }
}
