use axum::{Router, routing::get};

use super::controller::{get_user_by_id, get_user_data};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/userbyid/{user_id}", get(get_user_by_id))
        .route("/user/{user_id}", get(get_user_data))
}
