use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. INFO unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .init();
}
