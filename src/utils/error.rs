use crate::domain::model::Parameter;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SortError {
    #[error("Invalid {param}: expected a number but received {received_type} ({received_value})")]
    InvalidType {
        param: Parameter,
        received_type: &'static str,
        received_value: String,
    },

    #[error("Invalid {param}: expected a finite number but received {value}")]
    NonFinite { param: Parameter, value: f64 },

    #[error("Invalid {param}: expected a positive number but received {value}")]
    NonPositive { param: Parameter, value: f64 },
}

/// Coarse split between "wrong kind of data" and "right kind, bad value".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidType,
    InvalidRange,
}

impl SortError {
    pub fn param(&self) -> Parameter {
        match self {
            SortError::InvalidType { param, .. }
            | SortError::NonFinite { param, .. }
            | SortError::NonPositive { param, .. } => *param,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SortError::InvalidType { .. } => ErrorCategory::InvalidType,
            SortError::NonFinite { .. } | SortError::NonPositive { .. } => {
                ErrorCategory::InvalidRange
            }
        }
    }

    pub fn is_range_error(&self) -> bool {
        self.category() == ErrorCategory::InvalidRange
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
