use shadow_rs::shadow;
use tracing_subscriber::EnvFilter;

shadow!(build);

/// Install the global tracing subscriber
///
/// Logs go to stderr so the SVG document can be written to stdout. `RUST_LOG`
/// takes precedence over the `verbose` flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Name, version and source revision of this build
pub fn short_version_info() -> String {
    if build::SHORT_COMMIT.is_empty() {
        return format!("{} {}", build::PROJECT_NAME, build::PKG_VERSION);
    }
    format!(
        "{} {} ({}@{}{})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BRANCH,
        build::SHORT_COMMIT,
        if build::GIT_CLEAN { "" } else { "+dirty" }
    )
}

pub fn log_version_info() {
    tracing::info!("{}", short_version_info());
    tracing::info!(
        "Build date: {} ({})",
        build::BUILD_TIME_2822,
        build::BUILD_RUST_CHANNEL
    );
}
