//! Logging bootstrap

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install the stderr subscriber once.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. A subscriber the
/// host installed first is kept.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init();
        if let Err(err) = installed {
            tracing::debug!("Keeping the existing subscriber: {}", err);
        }
    });
}
