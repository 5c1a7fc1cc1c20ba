// Diagnostics - tracing subscriber bootstrap
//
// Program output goes to stdout with println!; diagnostics go to stderr so
// the two never interleave in redirected output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: RUST_LOG when set and valid, otherwise `fallback`,
/// otherwise `warn`.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_tracing(fallback: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(fallback))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing("debug");
        init_tracing("info");
        tracing::debug!("still alive");
    }
}
