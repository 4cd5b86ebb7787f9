use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use schoople_core::AppError;
use schoople_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::middleware::auth::require_auth;
use crate::modules::attendances::router::init_attendances_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::events::router::init_events_router;
use crate::modules::students::router::init_students_router;
use crate::modules::timetables::router::init_timetables_router;
use crate::modules::transports::router::init_transports_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database reachable"),
        (status = 500, description = "Database unreachable", body = crate::modules::auth::controller::ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn init_router(state: AppState) -> Router {
    // Everything under /api except login requires a bearer token.
    let protected = Router::new()
        .merge(init_students_router())
        .merge(init_timetables_router())
        .merge(init_attendances_router())
        .merge(init_transports_router())
        .merge(init_events_router())
        .merge(init_users_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest("/api", Router::new().merge(init_auth_router()).merge(protected))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
