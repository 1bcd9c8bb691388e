//! Summary line for a finished workout.

use std::fmt;

use serde::Serialize;

use crate::models::ActivityKind;

/// Metrics computed for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub kind: ActivityKind,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.kind.label(),
            self.duration,
            self.distance,
            self.speed,
            self.calories,
        )
    }
}

pub fn render(report: &Report) -> String {
    report.to_string()
}
