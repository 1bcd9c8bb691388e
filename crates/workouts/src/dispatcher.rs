//! Decoding of raw sensor packages into typed workouts.

use serde_json::Value;
use tracing::debug;

use crate::{
    config::SensorPackage,
    errors::WorkoutError,
    models::{ActivityKind, BaseParams, RunningParams, SwimmingParams, WalkingParams, Workout},
};

/// Builds the workout selected by `code` from its ordered parameters.
///
/// Parameter order per kind:
/// - `RUN`: steps, duration (h), weight (kg)
/// - `WLK`: steps, duration (h), weight (kg), height (cm)
/// - `SWM`: strokes, duration (h), weight (kg), pool length (m), lap count
pub fn dispatch(code: &str, params: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: ActivityKind = code.parse()?;

    if params.len() != kind.arity() {
        return Err(WorkoutError::invalid(
            kind,
            format!("expected {} values, got {}", kind.arity(), params.len()),
        ));
    }
    if let Some(pos) = params.iter().position(|v| !v.is_finite()) {
        return Err(WorkoutError::invalid(
            kind,
            format!("value at position {pos} is not a finite number"),
        ));
    }

    let base = BaseParams {
        action: whole_count(kind, params[0])?,
        duration_h: params[1],
        weight_kg: params[2],
    };

    let workout = match kind {
        ActivityKind::Running => Workout::Running(RunningParams { base }),
        ActivityKind::Walking => Workout::Walking(WalkingParams {
            base,
            height_cm: params[3],
        }),
        ActivityKind::Swimming => Workout::Swimming(SwimmingParams {
            base,
            pool_length_m: params[3],
            lap_count: params[4],
        }),
    };

    debug!(code, ?workout, "dispatched package");
    Ok(workout)
}

/// Decodes a package whose values come from an untyped source.
pub fn read_package(package: &SensorPackage) -> Result<Workout, WorkoutError> {
    let kind: ActivityKind = package.workout_type.parse()?;

    let params = package
        .data
        .iter()
        .enumerate()
        .map(|(pos, value)| {
            numeric(value).ok_or_else(|| {
                WorkoutError::invalid(
                    kind,
                    format!("value at position {pos} is not a number: {value}"),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    dispatch(&package.workout_type, &params)
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn whole_count(kind: ActivityKind, value: f64) -> Result<u64, WorkoutError> {
    if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::invalid(
            kind,
            format!("step count must be a non-negative whole number, got {value}"),
        ));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_dispatch_selects_variant() {
        assert!(matches!(
            dispatch("RUN", &[15000.0, 1.0, 75.0]),
            Ok(Workout::Running(_))
        ));
        assert!(matches!(
            dispatch("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::Walking(WalkingParams { height_cm, .. })) if height_cm == 180.0
        ));
        assert!(matches!(
            dispatch("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(SwimmingParams { pool_length_m, lap_count, .. }))
                if pool_length_m == 25.0 && lap_count == 40.0
        ));
    }

    #[test]
    fn test_unknown_code() {
        for code in ["XYZ", "", "run", "Swm", "RUN "] {
            match dispatch(code, &[1.0, 1.0, 1.0]) {
                Err(WorkoutError::UnknownActivityKind(c)) => assert_eq!(c, code),
                other => panic!("expected UnknownActivityKind for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_wrong_arity() {
        for params in [&[1.0, 1.0][..], &[1.0, 1.0, 1.0, 1.0][..], &[][..]] {
            assert!(matches!(
                dispatch("RUN", params),
                Err(WorkoutError::InvalidParameters {
                    kind: ActivityKind::Running,
                    ..
                })
            ));
        }
        assert!(matches!(
            dispatch("SWM", &[720.0, 1.0, 80.0, 25.0]),
            Err(WorkoutError::InvalidParameters {
                kind: ActivityKind::Swimming,
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_and_fractional_counts() {
        assert!(matches!(
            dispatch("RUN", &[100.0, f64::NAN, 75.0]),
            Err(WorkoutError::InvalidParameters { .. })
        ));
        assert!(matches!(
            dispatch("RUN", &[100.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidParameters { .. })
        ));
        assert!(matches!(
            dispatch("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_step_count_beyond_u64_rejected() {
        assert!(matches!(
            dispatch("RUN", &[18_446_744_073_709_551_616.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidParameters { .. })
        ));
        assert_eq!(
            dispatch("RUN", &[9_007_199_254_740_992.0, 1.0, 75.0])
                .unwrap()
                .base()
                .action,
            9_007_199_254_740_992
        );
    }

    #[test]
    fn test_zero_duration_is_accepted_at_dispatch() {
        // rejected later, when speed is computed
        assert!(dispatch("RUN", &[100.0, 0.0, 75.0]).is_ok());
    }

    #[test]
    fn test_read_package_rejects_non_numeric() {
        let package = SensorPackage {
            workout_type: "WLK".to_string(),
            data: vec![json!(9000), json!(1), json!("75"), json!(180)],
        };
        match read_package(&package) {
            Err(WorkoutError::InvalidParameters { kind, reason }) => {
                assert_eq!(kind, ActivityKind::Walking);
                assert!(reason.contains("position 2"));
            }
            other => panic!("expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn test_read_package_unknown_code_wins_over_bad_values() {
        let package = SensorPackage {
            workout_type: "BIK".to_string(),
            data: vec![json!(null)],
        };
        assert!(matches!(
            read_package(&package),
            Err(WorkoutError::UnknownActivityKind(code)) if code == "BIK"
        ));
    }

    #[test]
    fn test_read_package_integers_and_floats() {
        let package = SensorPackage {
            workout_type: "RUN".to_string(),
            data: vec![json!(15000), json!(1.5), json!(75)],
        };
        let workout = read_package(&package).unwrap();
        assert_eq!(workout.base().action, 15000);
        assert_eq!(workout.base().duration_h, 1.5);
    }
}
