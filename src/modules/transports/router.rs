use axum::{Router, routing::get};

use super::controller::get_transports;
use crate::state::AppState;

pub fn init_transports_router() -> Router<AppState> {
    Router::new().route("/transports/{school_id}", get(get_transports))
}
