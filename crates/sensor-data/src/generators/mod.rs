//! Package generators.
//!
//! - [`PackageGenerator`]: sensor packages for running, walking and swimming sessions
//! - [`BodyGenerator`]: body weight and height readings

pub mod body;
pub mod package;

pub use body::{Body, BodyGenerator};
pub use package::{GeneratorError, PackageGenerator};
