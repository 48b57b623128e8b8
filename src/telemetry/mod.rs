mod config;

pub use config::{LogFormat, TelemetryConfig};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so a script printed on stdout stays clean.
pub fn init_telemetry() {
    init_with_config(&TelemetryConfig::from_env());
}

pub fn init_with_config(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}': {}. Falling back to default.",
            config.filter, e
        );
        EnvFilter::new(TelemetryConfig::default().filter)
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    tracing::debug!(filter = %config.filter, "Tracing initialized");
}
