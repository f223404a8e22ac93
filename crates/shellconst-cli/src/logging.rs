use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SHELLCONST_LOG";

const DEFAULT_FILTER: &str = "warn,gen_shellconstants=info";

/// Installs a stderr fmt subscriber so stdout only carries program output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
