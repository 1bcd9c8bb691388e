//! Runner athletic profile.

use workouts::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for running sessions.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (10 km/h)
/// - Sessions between 20 minutes and 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0, // ~6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn session_hours(&self) -> (f64, f64) {
        (1.0 / 3.0, 2.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
