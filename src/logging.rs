use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("coffee_patterns=debug,info")
        } else {
            EnvFilter::new(format!("coffee_patterns={level},warn"))
        }
    })
}

/// Installs the stderr subscriber. Later calls are ignored.
pub fn init(verbose: bool, level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false, "warn");
        init(true, "debug");
    }
}
