use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{RunConfig, run_packages};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = RunConfig::default();
    tracing::info!("Running {} sensor packages", config.packages.len());

    let stdout = io::stdout();
    run_packages(&config, &mut stdout.lock())?;

    Ok(())
}
