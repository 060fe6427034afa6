use crate::domain::model::{Parameter, Reading};
use crate::utils::error::{Result, SortError};

/// Checks type, then finiteness, then positivity, returning the usable value.
pub fn validate_measurement(param: Parameter, reading: &Reading) -> Result<f64> {
    let value = reading.as_number().ok_or_else(|| SortError::InvalidType {
        param,
        received_type: reading.type_name(),
        received_value: reading.to_string(),
    })?;

    validate_positive_finite(param, value)
}

pub fn validate_positive_finite(param: Parameter, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SortError::NonFinite { param, value });
    }

    if value <= 0.0 {
        return Err(SortError::NonPositive { param, value });
    }

    tracing::trace!("{} = {} accepted", param, value);
    Ok(value)
}
