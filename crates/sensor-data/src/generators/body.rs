//! Body measurement generation.

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// Body measurements attached to a generated package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Kilograms, one decimal place.
    pub weight_kg: f64,
    /// Whole centimeters.
    pub height_cm: f64,
}

/// Generates adult body measurements from normal distributions.
#[derive(Debug, Clone)]
pub struct BodyGenerator {
    weight_mean: f64,
    weight_std_dev: f64,
    height_mean: f64,
    height_std_dev: f64,
}

impl Default for BodyGenerator {
    fn default() -> Self {
        Self {
            weight_mean: 72.0,
            weight_std_dev: 12.0,
            height_mean: 172.0,
            height_std_dev: 9.0,
        }
    }
}

impl BodyGenerator {
    pub fn new(
        weight_mean: f64,
        weight_std_dev: f64,
        height_mean: f64,
        height_std_dev: f64,
    ) -> Result<Self, NormalError> {
        check_std_dev(weight_std_dev)?;
        check_std_dev(height_std_dev)?;
        Ok(Self {
            weight_mean,
            weight_std_dev,
            height_mean,
            height_std_dev,
        })
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Body {
        let weight_kg = sample(self.weight_mean, self.weight_std_dev, rng).clamp(40.0, 150.0);
        let height_cm = sample(self.height_mean, self.height_std_dev, rng).clamp(140.0, 210.0);
        Body {
            weight_kg: (weight_kg * 10.0).round() / 10.0,
            height_cm: height_cm.round(),
        }
    }
}

// `Normal::new` only rejects a non-finite deviation.
fn check_std_dev(std_dev: f64) -> Result<(), NormalError> {
    if !(std_dev.is_finite() && std_dev >= 0.0) {
        return Err(NormalError::BadVariance);
    }
    Ok(())
}

fn sample(mean: f64, std_dev: f64, rng: &mut impl Rng) -> f64 {
    Normal::new(mean, std_dev).map_or(mean, |normal| normal.sample(rng))
}
