pub mod courses;
pub mod users;

pub use self::courses::model::Course;
pub use self::users::model::User;
