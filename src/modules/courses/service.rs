use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

use super::model::{Course, CourseWithOwner, NewCourse, UpdateCourseDto};

/// Flat row produced by joining a course with its owner.
#[derive(Debug, sqlx::FromRow)]
struct CourseOwnerRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    estimated_time: Option<String>,
    materials_needed: Option<String>,
    owner_first_name: String,
    owner_last_name: String,
    owner_email_address: String,
}

impl From<CourseOwnerRow> for CourseWithOwner {
    fn from(row: CourseOwnerRow) -> Self {
        CourseWithOwner {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            estimated_time: row.estimated_time,
            materials_needed: row.materials_needed,
            user: User {
                id: row.user_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
        }
    }
}

const COURSE_WITH_OWNER_SELECT: &str = "SELECT c.id, c.user_id, c.title, c.description, c.estimated_time, c.materials_needed,
            u.first_name AS owner_first_name,
            u.last_name AS owner_last_name,
            u.email_address AS owner_email_address
     FROM courses c
     JOIN users u ON u.id = c.user_id";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_courses(db: &SqlitePool) -> Result<Vec<CourseWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} ORDER BY c.created_at, c.id"
        ))
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &SqlitePool, id: Uuid) -> Result<CourseWithOwner, AppError> {
        let row = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        Ok(row.into())
    }

    /// Bare lookup for the mutation path, where existence must be resolved
    /// before the ownership decision.
    #[instrument(skip(db))]
    pub async fn find_course(db: &SqlitePool, id: Uuid) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, user_id, title, description, estimated_time, materials_needed
             FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(course)
    }

    /// The owner is the authenticated identity, never a body field.
    #[instrument(skip(db, new_course))]
    pub async fn create_course(
        db: &SqlitePool,
        owner_id: Uuid,
        new_course: NewCourse,
    ) -> Result<Course, AppError> {
        let now = Utc::now();

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (id, user_id, title, description, estimated_time, materials_needed, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, user_id, title, description, estimated_time, materials_needed",
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(&new_course.title)
        .bind(&new_course.description)
        .bind(&new_course.estimated_time)
        .bind(&new_course.materials_needed)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::internal(anyhow::Error::new(e).context("Failed to insert course")))?;

        Ok(course)
    }

    /// Partial merge: fields absent from the request keep their prior
    /// values. Callers have already passed the ownership guard.
    #[instrument(skip(db, course, changes))]
    pub async fn update_course(
        db: &SqlitePool,
        course: &Course,
        changes: UpdateCourseDto,
    ) -> Result<(), AppError> {
        let title = changes.title.unwrap_or_else(|| course.title.clone());
        let description = changes
            .description
            .unwrap_or_else(|| course.description.clone());
        let estimated_time = changes.estimated_time.or_else(|| course.estimated_time.clone());
        let materials_needed = changes
            .materials_needed
            .or_else(|| course.materials_needed.clone());

        sqlx::query(
            "UPDATE courses
             SET title = $1, description = $2, estimated_time = $3, materials_needed = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(&title)
        .bind(&description)
        .bind(&estimated_time)
        .bind(&materials_needed)
        .bind(Utc::now())
        .bind(course.id)
        .execute(db)
        .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &SqlitePool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
