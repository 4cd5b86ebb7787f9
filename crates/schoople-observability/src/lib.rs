//! Schoople Observability
//!
//! - Structured logging through `tracing`
//! - Distributed tracing via OpenTelemetry (OTLP)
//! - Prometheus metrics for HTTP traffic and authentication
//! - Per-request logging middleware
//!
//! The heavy layers sit behind the `observability` feature. At runtime they can
//! still be switched off with `OBSERVABILITY_ENABLED=false`, in which case a
//! compact console subscriber is installed instead.
//!
//! # Examples
//!
//! ```no_run
//! use schoople_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
pub mod middleware;
mod toggle;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use middleware::logging_middleware;
pub use toggle::is_observability_enabled;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics_router, metrics_middleware, track_jwt_issued, track_jwt_validation,
    track_login_failure, track_login_success,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Console logging only.
    pub fn init_tracing() {
        crate::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics_router() -> Option<Router> {
        None
    }

    pub fn track_login_success(_role: &str) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_jwt_issued() {}
    pub fn track_jwt_validation(_success: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
