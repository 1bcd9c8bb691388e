//! Workout metrics from fitness-tracker sensor packages.
//!
//! A package is an activity code plus ordered readings. The dispatcher turns
//! it into a [`Workout`], the calculator derives distance, mean speed and
//! calories, and the report driver prints one summary line per session.
//!
//! ```rust,ignore
//! use workouts::{dispatch, run_session};
//!
//! let workout = dispatch("RUN", &[15000.0, 1.0, 75.0])?;
//! run_session(&workout, &mut std::io::stdout())?;
//! ```

pub mod calculator;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod report;
pub mod session;

pub use config::{RunConfig, SensorPackage};
pub use dispatcher::{dispatch, read_package};
pub use errors::WorkoutError;
pub use models::{ActivityKind, Workout};
pub use report::{Report, render};
pub use session::{build_report, run_packages, run_session};
