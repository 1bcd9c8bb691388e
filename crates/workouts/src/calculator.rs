//! Distance, mean speed and calorie formulas per activity kind.

use tracing::debug;

use crate::{
    errors::WorkoutError,
    models::{ActivityKind, BaseParams, RunningParams, SwimmingParams, WalkingParams, Workout},
};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Fixed constants for one activity kind. Never mutated after startup.
#[derive(Debug, Clone, Copy)]
pub struct KindConstants<C> {
    /// Distance covered by one step or stroke, in meters.
    pub len_step_m: f64,
    pub calories: C,
}

/// `(speed_multiplier * speed + speed_shift) * weight / 1000 * minutes`
#[derive(Debug, Clone, Copy)]
pub struct RunningCoefficients {
    pub speed_multiplier: f64,
    pub speed_shift: f64,
}

/// `(weight_multiplier * weight + speed² / height * speed_height_multiplier * weight) * minutes`
#[derive(Debug, Clone, Copy)]
pub struct WalkingCoefficients {
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
}

/// `(speed + speed_shift) * weight_multiplier * weight * hours`
#[derive(Debug, Clone, Copy)]
pub struct SwimmingCoefficients {
    pub speed_shift: f64,
    pub weight_multiplier: f64,
}

pub const RUNNING: KindConstants<RunningCoefficients> = KindConstants {
    len_step_m: 0.65,
    calories: RunningCoefficients {
        speed_multiplier: 18.0,
        speed_shift: 1.79,
    },
};

pub const WALKING: KindConstants<WalkingCoefficients> = KindConstants {
    len_step_m: 0.65,
    calories: WalkingCoefficients {
        weight_multiplier: 0.035,
        speed_height_multiplier: 0.029,
    },
};

pub const SWIMMING: KindConstants<SwimmingCoefficients> = KindConstants {
    len_step_m: 1.38,
    calories: SwimmingCoefficients {
        speed_shift: 1.1,
        weight_multiplier: 2.0,
    },
};

/// Step (or stroke) length for `kind`, in meters.
pub const fn len_step_m(kind: ActivityKind) -> f64 {
    match kind {
        ActivityKind::Running => RUNNING.len_step_m,
        ActivityKind::Walking => WALKING.len_step_m,
        ActivityKind::Swimming => SWIMMING.len_step_m,
    }
}

impl Workout {
    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        let base = self.base();
        base.action as f64 * len_step_m(self.kind()) / M_IN_KM
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> Result<f64, WorkoutError> {
        let duration_h = divisor(self.base().duration_h, "duration")?;
        let speed = match self {
            Workout::Swimming(p) => p.pool_length_m * p.lap_count / M_IN_KM / duration_h,
            Workout::Running(_) | Workout::Walking(_) => self.distance() / duration_h,
        };
        finite(self.kind(), speed, "mean speed")
    }

    /// Calories burned, in kilocalories.
    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        self.calories_at_speed(self.mean_speed()?)
    }

    /// Calories burned given an already computed mean speed in km/h.
    pub fn calories_at_speed(&self, speed: f64) -> Result<f64, WorkoutError> {
        let calories = match self {
            Workout::Running(p) => running_calories(p, speed),
            Workout::Walking(p) => walking_calories(p, speed)?,
            Workout::Swimming(p) => swimming_calories(p, speed),
        };
        debug!(kind = ?self.kind(), speed, calories, "computed calories");
        finite(self.kind(), calories, "calories")
    }
}

/// Zero and subnormal divisors both count as zero.
fn divisor(value: f64, quantity: &'static str) -> Result<f64, WorkoutError> {
    if !value.is_normal() {
        return Err(WorkoutError::DivisionByZero(quantity));
    }
    Ok(value)
}

fn finite(kind: ActivityKind, value: f64, metric: &str) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::invalid(
            kind,
            format!("{metric} overflows for the given readings"),
        ));
    }
    Ok(value)
}

fn running_calories(p: &RunningParams, speed: f64) -> f64 {
    let BaseParams {
        duration_h,
        weight_kg,
        ..
    } = p.base;
    let c = RUNNING.calories;
    (c.speed_multiplier * speed + c.speed_shift) * weight_kg / M_IN_KM * (duration_h * MIN_IN_H)
}

fn walking_calories(p: &WalkingParams, speed: f64) -> Result<f64, WorkoutError> {
    let BaseParams {
        duration_h,
        weight_kg,
        ..
    } = p.base;
    let c = WALKING.calories;
    let speed_ms = speed * KMH_IN_MSEC;
    let height_m = divisor(p.height_cm, "height")? / CM_IN_M;

    Ok((c.weight_multiplier * weight_kg
        + (speed_ms.powi(2) / height_m) * c.speed_height_multiplier * weight_kg)
        * duration_h
        * MIN_IN_H)
}

fn swimming_calories(p: &SwimmingParams, speed: f64) -> f64 {
    let BaseParams {
        duration_h,
        weight_kg,
        ..
    } = p.base;
    let c = SWIMMING.calories;
    (speed + c.speed_shift) * c.weight_multiplier * weight_kg * duration_h
}
