use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Output goes to stderr so `invoke` keeps stdout for the response. No
/// timestamps: the platform stamps each ingested line itself.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}
