use axum::{Router, routing::get};

use super::controller::get_student_data;
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new().route("/student-data/{id}", get(get_student_data))
}
