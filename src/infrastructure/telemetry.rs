use tracing_subscriber::EnvFilter;

use crate::settings::AppConfig;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// production logs are emitted as JSON lines.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}
