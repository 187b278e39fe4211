use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

pub fn filter_directive() -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// install just fails quietly.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
