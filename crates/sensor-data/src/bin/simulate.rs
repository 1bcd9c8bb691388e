//! Generates random sensor packages and prints their summaries.
//!
//! Run with:
//! ```
//! cargo run -p sensor-data --bin simulate
//! ```

use rand::{SeedableRng, rngs::StdRng};
use sensor_data::prelude::*;
use tracing_subscriber::EnvFilter;
use workouts::run_packages;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(config.seed); // Reproducible data

    let packages = PackageGenerator::default().generate_batch(&config, &mut rng)?;
    tracing::info!("Generated {} packages", packages.len());

    let stdout = std::io::stdout();
    let reports = run_packages(&RunConfig { packages }, &mut stdout.lock())?;

    // Summary output
    let total_km: f64 = reports.iter().map(|r| r.distance).sum();
    let total_kcal: f64 = reports.iter().map(|r| r.calories).sum();
    tracing::info!("Simulation completed!");
    tracing::info!("  Sessions: {}", reports.len());
    tracing::info!("  Distance: {total_km:.3} km");
    tracing::info!("  Calories: {total_kcal:.3} kcal");

    Ok(())
}
