//! Synthetic sensor packages for workouts.
//!
//! This crate generates plausible `(code, readings)` packages for running,
//! walking and swimming sessions to support manual verification and
//! property testing of the `workouts` core.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use sensor_data::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let mut rng = StdRng::seed_from_u64(config.seed);
//! let packages = PackageGenerator::default().generate_batch(&config, &mut rng)?;
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ActivityMix, GeneratorConfig};
    pub use crate::generators::{Body, BodyGenerator, GeneratorError, PackageGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use workouts::{ActivityKind, RunConfig, SensorPackage};
}
