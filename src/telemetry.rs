use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to stderr. `RUST_LOG` takes precedence over
/// `default_filter`. Records emitted through `log` (actix-web's request logger) are
/// forwarded as well.
pub fn init_subscriber(default_filter: &str) -> Result<(), anyhow::Error> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
