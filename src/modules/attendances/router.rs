use axum::{Router, routing::get};

use super::controller::get_attendances;
use crate::state::AppState;

pub fn init_attendances_router() -> Router<AppState> {
    Router::new().route("/attendances/{student_id}", get(get_attendances))
}
