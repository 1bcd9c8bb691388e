//! Report driver: computes a workout's metrics and emits its summary line.

use std::io::Write;

use tracing::{debug, info};

use crate::{
    config::RunConfig,
    dispatcher::read_package,
    errors::WorkoutError,
    models::Workout,
    report::{Report, render},
};

/// Computes the report for `workout` without emitting it.
pub fn build_report(workout: &Workout) -> Result<Report, WorkoutError> {
    let distance = workout.distance();
    let speed = workout.mean_speed()?;
    let calories = workout.calories_at_speed(speed)?;

    Ok(Report {
        kind: workout.kind(),
        duration: workout.base().duration_h,
        distance,
        speed,
        calories,
    })
}

/// Writes one summary line for `workout` to `out`.
///
/// Nothing is written when a metric fails.
pub fn run_session(workout: &Workout, out: &mut impl Write) -> Result<Report, WorkoutError> {
    let report = build_report(workout)?;
    writeln!(out, "{}", render(&report))?;
    debug!(kind = ?report.kind, "session reported");
    Ok(report)
}

/// Processes every package in order, stopping at the first error.
pub fn run_packages(config: &RunConfig, out: &mut impl Write) -> Result<Vec<Report>, WorkoutError> {
    let mut reports = Vec::with_capacity(config.packages.len());
    for package in &config.packages {
        let workout = read_package(package)?;
        reports.push(run_session(&workout, out)?);
    }
    out.flush()?;

    info!("Processed {} packages", reports.len());
    Ok(reports)
}
