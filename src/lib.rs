pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::classifier::{classify, classify_package, classify_readings};
pub use crate::domain::model::{
    Classification, Measurement, Package, Parameter, Reading, Stack, DIMENSION_THRESHOLD,
    MASS_THRESHOLD, VOLUME_THRESHOLD,
};
pub use crate::utils::error::{ErrorCategory, Result, SortError};
