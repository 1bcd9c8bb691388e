//! Run configuration: the ordered packages to process.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::WorkoutError;

/// One raw reading from the sensor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Activity code, e.g. `"RUN"`.
    pub workout_type: String,
    /// Ordered values; validated by the dispatcher, not by the parser.
    pub data: Vec<Value>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.iter().map(|v| json!(v)).collect(),
        }
    }
}

/// Configuration for one run of the report loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Packages, processed in order.
    pub packages: Vec<SensorPackage>,
}

impl RunConfig {
    pub fn from_json(document: &str) -> Result<Self, WorkoutError> {
        Ok(serde_json::from_str(document)?)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            packages: vec![
                SensorPackage {
                    workout_type: "SWM".into(),
                    data: vec![json!(720), json!(1), json!(80), json!(25), json!(40)],
                },
                SensorPackage {
                    workout_type: "RUN".into(),
                    data: vec![json!(15000), json!(1), json!(75)],
                },
                SensorPackage {
                    workout_type: "WLK".into(),
                    data: vec![json!(9000), json!(1), json!(75), json!(180)],
                },
            ],
        }
    }
}
