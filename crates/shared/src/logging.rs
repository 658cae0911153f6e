use std::env;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

pub fn configure_logging() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(env::var("RUST_LOG").unwrap_or("info".to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stdout);

    let initialized = if env::var("LOG_FORMAT").unwrap_or("text".to_string()) == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = initialized {
        warn!("Logging was already initialized, keeping the existing subscriber: {e}");
    }

    Ok(())
}
