use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for CLI runs.
/// Priority: WAYPOST_LOG env > verbose flag > default (info)
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WAYPOST_LOG").unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("waypost={}", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
