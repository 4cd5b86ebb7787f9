use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Compact console subscriber used when observability is off.
///
/// `LOG_LEVEL` (default "info") sets the level for Schoople's own crates;
/// `RUST_LOG` overrides the whole filter. Noisy dependencies stay at `warn`.
/// Installing twice is a no-op.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        eprintln!("ℹ️  Observability disabled - console logging only");
    }
}

pub(crate) fn default_directives(log_level: &str) -> String {
    format!(
        "schoople={log_level},schoople_core={log_level},schoople_db={log_level},\
         schoople_auth={log_level},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn"
    )
}
