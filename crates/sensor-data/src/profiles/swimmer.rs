//! Swimmer athletic profile.

use workouts::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// - Base speed: ~2.4 km/h (2:30 per 100 m)
/// - Pool length: 25 m unless configured otherwise
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Pool length in meters.
    pool_length_m: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.4,
            variance: 0.10,
            pool_length_m: 25.0,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer training in a pool of the given length.
    pub fn in_pool(pool_length_m: f64) -> Self {
        Self {
            pool_length_m,
            ..Default::default()
        }
    }

    /// Creates a competitive swimmer profile (~4.5 km/h in a 50 m pool).
    pub fn competitive() -> Self {
        Self {
            base_speed: 4.5,
            variance: 0.05,
            pool_length_m: 50.0,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.5, 1.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = SwimmerProfile::default();
        assert_eq!(profile.kind(), ActivityKind::Swimming);
        assert_eq!(profile.pool_length_m(), 25.0);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SwimmerProfile::in_pool(33.0).pool_length_m(), 33.0);

        let competitive = SwimmerProfile::competitive();
        assert_eq!(competitive.pool_length_m(), 50.0);
        assert!(competitive.base_speed_kmh() > SwimmerProfile::default().base_speed_kmh());
    }
}
