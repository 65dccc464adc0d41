use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::courses::model::{Course, CourseWithOwner, CreateCourseDto, UpdateCourseDto};
use crate::modules::users::model::{CreateUserDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::create_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            Course,
            CourseWithOwner,
            CreateCourseDto,
            UpdateCourseDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Signup and the authenticated user's identity"),
        (name = "Courses", description = "Course catalog and owner-gated mutation")
    ),
    info(
        title = "Coursebook API",
        version = "0.1.0",
        description = "REST API for managing courses and the users who own them. Writes require Basic authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            )
        }
    }
}
