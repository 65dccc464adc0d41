//! Course entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::User;

/// A course as stored. Ownership (`user_id`) is assigned at creation from
/// the authenticated identity and never changes afterwards.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// A course joined with the owning user's projection, as returned by the
/// read endpoints. The owner's digest never appears here.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithOwner {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user: User,
}

/// Course creation payload. Any client-supplied `userId` or `id` is
/// ignored; the owner comes from the authenticated identity.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(
        required(message = r#"Please provide a value for "title""#),
        length(min = 1, message = r#"Please provide a value for "title""#)
    )]
    pub title: Option<String>,
    #[validate(
        required(message = r#"Please provide a value for "description""#),
        length(min = 1, message = r#"Please provide a value for "description""#)
    )]
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// Partial update payload: absent fields retain their prior values,
/// present fields overwrite. A required field that is present but blank is
/// a validation error.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = r#"Please provide a value for "title""#))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = r#"Please provide a value for "description""#))]
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

/// A validated course creation, ready for the store.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl CreateCourseDto {
    /// Required fields are guaranteed present once validation has passed.
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
        }
    }
}
