use uuid::Uuid;

use crate::modules::courses::model::Course;
use crate::utils::errors::AppError;

/// Allows mutation iff the authenticated identity owns the course.
///
/// Callers must have already resolved the course from the store; existence
/// is never decided here, so a missing course can never surface as a 403.
pub fn ensure_owner(identity_id: Uuid, course: &Course) -> Result<(), AppError> {
    if course.user_id == identity_id {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You do not have permission to modify this course",
        ))
    }
}
