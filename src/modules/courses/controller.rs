use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::ownership::ensure_owner;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Course, CourseWithOwner, CreateCourseDto, UpdateCourseDto};
use super::service::CourseService;

async fn find_existing_course(state: &AppState, id: Uuid) -> Result<Course, AppError> {
    CourseService::find_course(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses, each with its owner", body = [CourseWithOwner])
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = CourseService::get_courses(&state.db).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "The course with its owner", body = CourseWithOwner),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created, Location set to its URI"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Access denied")
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
pub async fn create_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create_course(&state.db, user.id, dto.into_new_course()).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/courses/{}", course.id))],
    ))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Access denied"),
        (status = 403, description = "Caller does not own the course"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
pub async fn update_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<StatusCode, AppError> {
    // Existence first, then ownership; a missing course is 404, never 403.
    let course = find_existing_course(&state, id).await?;
    ensure_owner(user.id, &course)?;

    CourseService::update_course(&state.db, &course, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Access denied"),
        (status = 403, description = "Caller does not own the course"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("basic_auth" = []))
)]
pub async fn delete_course(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let course = find_existing_course(&state, id).await?;
    ensure_owner(user.id, &course)?;

    CourseService::delete_course(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
