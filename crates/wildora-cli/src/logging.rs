use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wildora_core::config::DebugSettings;

/// Installs the global subscriber. `RUST_LOG` wins over the config level.
pub fn init(settings: &DebugSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
