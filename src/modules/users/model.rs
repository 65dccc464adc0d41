//! User entity and DTOs.
//!
//! [`User`] is the projection safe to put on the wire: it never carries the
//! password digest. Signup input arrives as [`CreateUserDto`], whose fields
//! are optional so that every missing or blank field can be reported in one
//! validation pass.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user, as exposed to clients and embedded in course representations.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Signup payload.
///
/// Validation reports every violated rule, not just the first. A field that
/// is absent and a field that is present-but-empty produce the same
/// "provide a value" message.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(
        required(message = r#"Please provide a value for "first name""#),
        length(min = 1, message = r#"Please provide a value for "first name""#)
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = r#"Please provide a value for "last name""#),
        length(min = 1, message = r#"Please provide a value for "last name""#)
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = r#"Please provide a value for "email""#),
        length(min = 1, message = r#"Please provide a value for "email""#),
        email(message = r#"Please provide a valid email address for "email""#)
    )]
    pub email_address: Option<String>,
    #[validate(
        required(message = r#"Please provide a value for "password""#),
        length(min = 1, message = r#"Please provide a value for "password""#)
    )]
    pub password: Option<String>,
}

/// A validated signup, ready for the store. The password is still plaintext
/// here; [`UserService::create_user`] hashes it before persisting.
///
/// [`UserService::create_user`]: super::service::UserService::create_user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl CreateUserDto {
    /// Fields are guaranteed present once validation has passed.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email_address: self.email_address.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        }
    }
}
