//! Athletic performance profiles.
//!
//! Profiles define realistic speeds and session lengths for each activity kind.
//! They are used by the package generator to produce plausible sensor readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::ActivityKind;

/// Trait for athletic performance profiles.
///
/// Implementations provide:
/// - The activity kind they describe
/// - Typical speed in km/h
/// - A range of session durations
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> ActivityKind;

    /// Typical sustained speed in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Shortest and longest plausible session, in hours.
    fn session_hours(&self) -> (f64, f64);

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}
