use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, User};
use super::service::UserService;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The currently authenticated user", body = User),
        (status = 401, description = "Access denied")
    ),
    tag = "Users",
    security(("basic_auth" = []))
)]
pub async fn get_current_user(AuthUser(user): AuthUser) -> Json<User> {
    // The caller only ever sees their own identity.
    Json(user)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created, Location set to /"),
        (status = 400, description = "Validation failed or email already in use")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::create_user(&state.db, dto.into_new_user()).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
