//! Walker athletic profile.

use workouts::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Based on typical walker performance:
/// - Base speed: ~5.5 km/h
/// - Sessions between 30 minutes and 3 hours
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 5.5,
            variance: 0.12,
        }
    }
}

impl WalkerProfile {
    /// Creates a new walker profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a race walker profile (~8 km/h base).
    pub fn race_walker() -> Self {
        Self {
            base_speed: 8.0,
            variance: 0.06,
        }
    }

    /// Creates a leisurely walker profile (~4.0 km/h base).
    pub fn leisurely() -> Self {
        Self::with_speed(4.0)
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.5, 3.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
