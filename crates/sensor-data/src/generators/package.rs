//! Sensor package generation from athlete profiles.

use rand::{Rng, distributions::WeightedIndex, prelude::Distribution};
use thiserror::Error;
use tracing::debug;
use workouts::{ActivityKind, SensorPackage, calculator::len_step_m};

use crate::{
    config::GeneratorConfig,
    generators::BodyGenerator,
    profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance},
};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid activity mix: {0}")]
    InvalidMix(#[from] rand::distributions::WeightedError),
}

/// Generates sensor packages whose readings match a profile's pace.
#[derive(Debug, Clone, Default)]
pub struct PackageGenerator {
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
    body: BodyGenerator,
}

impl PackageGenerator {
    pub fn new(runner: RunnerProfile, walker: WalkerProfile, swimmer: SwimmerProfile) -> Self {
        Self {
            runner,
            walker,
            swimmer,
            body: BodyGenerator::default(),
        }
    }

    pub fn with_body(mut self, body: BodyGenerator) -> Self {
        self.body = body;
        self
    }

    /// Generates one package of the given kind.
    pub fn generate(&self, kind: ActivityKind, rng: &mut impl Rng) -> SensorPackage {
        let profile: &dyn AthleteProfile = match kind {
            ActivityKind::Running => &self.runner,
            ActivityKind::Walking => &self.walker,
            ActivityKind::Swimming => &self.swimmer,
        };

        let (min_h, max_h) = profile.session_hours();
        let duration_h = round_to(rng.gen_range(min_h..=max_h), 100.0);
        let speed_kmh = profile.base_speed_kmh() * sample_variance(profile, rng);
        let distance_m = speed_kmh * duration_h * 1000.0;
        let step_m = len_step_m(kind);
        let body = self.body.generate(rng);

        let data = match kind {
            ActivityKind::Running => {
                let steps = (distance_m / step_m).round();
                vec![steps, duration_h, body.weight_kg]
            }
            ActivityKind::Walking => {
                let steps = (distance_m / step_m).round();
                vec![steps, duration_h, body.weight_kg, body.height_cm]
            }
            ActivityKind::Swimming => {
                let pool_m = self.swimmer.pool_length_m();
                let laps = (distance_m / pool_m).round().max(1.0);
                let strokes = (laps * pool_m / step_m).round();
                vec![strokes, duration_h, body.weight_kg, pool_m, laps]
            }
        };

        debug!(code = kind.code(), ?data, "generated package");
        SensorPackage::new(kind.code(), &data)
    }

    /// Generates `config.packages` packages with kinds drawn from `config.mix`.
    pub fn generate_batch(
        &self,
        config: &GeneratorConfig,
        rng: &mut impl Rng,
    ) -> Result<Vec<SensorPackage>, GeneratorError> {
        let weighted = config.mix.weighted();
        let index = WeightedIndex::new(weighted.iter().map(|(_, weight)| *weight))?;

        Ok((0..config.packages)
            .map(|_| {
                let (kind, _) = weighted[index.sample(rng)];
                self.generate(kind, rng)
            })
            .collect())
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
