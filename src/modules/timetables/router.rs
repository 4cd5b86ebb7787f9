use axum::{Router, routing::get};

use super::controller::get_timetable_details;
use crate::state::AppState;

pub fn init_timetables_router() -> Router<AppState> {
    Router::new().route("/timetable-details", get(get_timetable_details))
}
