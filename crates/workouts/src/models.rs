use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// The closed set of workouts a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::Walking,
    ];

    /// Package code sent by the sensor unit.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Label used in the rendered summary line.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "бег",
            ActivityKind::Walking => "ходьба",
            ActivityKind::Swimming => "плавание",
        }
    }

    /// Number of values a package of this kind must carry.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityKind(code.to_string()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Readings shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseParams {
    /// Steps (or strokes when swimming).
    pub action: u64,
    /// Duration in hours.
    pub duration_h: f64,
    /// Body weight in kilograms.
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningParams {
    #[serde(flatten)]
    pub base: BaseParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingParams {
    #[serde(flatten)]
    pub base: BaseParams,
    /// Height in centimeters.
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimmingParams {
    #[serde(flatten)]
    pub base: BaseParams,
    /// Pool length in meters.
    pub pool_length_m: f64,
    /// Number of pool lengths swum.
    pub lap_count: f64,
}

/// One decoded session, ready for metric computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Workout {
    Running(RunningParams),
    Walking(WalkingParams),
    Swimming(SwimmingParams),
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Running(_) => ActivityKind::Running,
            Workout::Walking(_) => ActivityKind::Walking,
            Workout::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub fn base(&self) -> &BaseParams {
        match self {
            Workout::Running(p) => &p.base,
            Workout::Walking(p) => &p.base,
            Workout::Swimming(p) => &p.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.code().parse::<ActivityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(matches!(
            "run".parse::<ActivityKind>(),
            Err(WorkoutError::UnknownActivityKind(code)) if code == "run"
        ));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActivityKind::Running.label(), "бег");
        assert_eq!(ActivityKind::Walking.label(), "ходьба");
        assert_eq!(ActivityKind::Swimming.label(), "плавание");
        assert_eq!(ActivityKind::Swimming.to_string(), "плавание");
    }

    #[test]
    fn test_workout_kind_and_base() {
        let base = BaseParams {
            action: 100,
            duration_h: 0.5,
            weight_kg: 60.0,
        };
        let workout = Workout::Walking(WalkingParams {
            base,
            height_cm: 170.0,
        });
        assert_eq!(workout.kind(), ActivityKind::Walking);
        assert_eq!(workout.base(), &base);
    }
}
