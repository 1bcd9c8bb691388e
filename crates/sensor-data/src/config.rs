//! Configuration types for sensor package generation.

use serde::{Deserialize, Serialize};
use workouts::ActivityKind;

/// Relative weights for choosing the activity kind of each package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityMix {
    pub running: f64,
    pub walking: f64,
    pub swimming: f64,
}

impl Default for ActivityMix {
    fn default() -> Self {
        Self {
            running: 0.5,
            walking: 0.3,
            swimming: 0.2,
        }
    }
}

impl ActivityMix {
    /// A mix that only produces one kind.
    pub fn only(kind: ActivityKind) -> Self {
        let mut mix = Self {
            running: 0.0,
            walking: 0.0,
            swimming: 0.0,
        };
        match kind {
            ActivityKind::Running => mix.running = 1.0,
            ActivityKind::Walking => mix.walking = 1.0,
            ActivityKind::Swimming => mix.swimming = 1.0,
        }
        mix
    }

    pub(crate) fn weighted(&self) -> [(ActivityKind, f64); 3] {
        [
            (ActivityKind::Running, self.running),
            (ActivityKind::Walking, self.walking),
            (ActivityKind::Swimming, self.swimming),
        ]
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of packages to generate.
    pub packages: usize,

    /// Seed for reproducible output.
    pub seed: u64,

    /// Activity kind distribution.
    pub mix: ActivityMix,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            packages: 20,
            seed: 12345,
            mix: ActivityMix::default(),
        }
    }
}
