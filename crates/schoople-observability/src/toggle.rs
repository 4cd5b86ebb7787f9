use std::sync::OnceLock;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// `OBSERVABILITY_ENABLED` (default on). Always `false` without the `observability` feature.
pub fn is_observability_enabled() -> bool {
    cfg!(feature = "observability")
        && *OBSERVABILITY_ENABLED
            .get_or_init(|| parse_flag(std::env::var("OBSERVABILITY_ENABLED").ok().as_deref()))
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let v = v.trim().to_ascii_lowercase();
            v != "false" && v != "0"
        }
        None => true,
    }
}
