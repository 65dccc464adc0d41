use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_user, get_current_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", get(get_current_user).post(create_user))
}
