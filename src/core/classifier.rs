use crate::domain::model::{Package, Reading, Stack};
use crate::utils::error::Result;

/// Validates the four measurements and returns the stack the package belongs to.
///
/// Width, height and length are in centimeters, mass in kilograms. The first
/// invalid value, in that order, is reported.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Stack> {
    let package = Package::new(width, height, length, mass)?;
    Ok(classify_package(&package))
}

/// Same as [`classify`] for loosely typed input, e.g. values decoded from JSON.
/// Fewer than four readings fail on the first absent one.
pub fn classify_readings(readings: &[Reading]) -> Result<Stack> {
    let package = Package::from_readings(readings)?;
    Ok(classify_package(&package))
}

pub fn classify_package(package: &Package) -> Stack {
    let classification = package.classification();
    tracing::debug!(
        "volume={} bulky={} heavy={} -> {}",
        classification.volume,
        classification.bulky,
        classification.heavy,
        classification.stack
    );
    classification.stack
}
