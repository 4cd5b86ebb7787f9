use axum::{Router, routing::get};

use super::controller::get_events;
use crate::state::AppState;

pub fn init_events_router() -> Router<AppState> {
    Router::new().route("/events/{school_id}", get(get_events))
}
