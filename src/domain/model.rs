use crate::utils::error::Result;
use crate::utils::validation::{validate_measurement, validate_positive_finite};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume at or above which a package is bulky (cm³).
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;
/// Single dimension at or above which a package is bulky (cm).
pub const DIMENSION_THRESHOLD: f64 = 150.0;
/// Mass at or above which a package is heavy (kg).
pub const MASS_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Width,
    Height,
    Length,
    Mass,
}

impl Parameter {
    /// Validation order.
    pub const ALL: [Parameter; 4] = [
        Parameter::Width,
        Parameter::Height,
        Parameter::Length,
        Parameter::Mass,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Width => "width",
            Parameter::Height => "height",
            Parameter::Length => "length",
            Parameter::Mass => "mass",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sensor value as handed over by the caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
    List(Vec<Reading>),
    Object(serde_json::Map<String, serde_json::Value>),
    Missing,
}

impl Reading {
    /// Numeric text (including `NaN` and `inf`) becomes a number, anything else stays text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Reading::Number(value),
            Err(_) => Reading::Text(raw.to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Reading::Number(_) => "number",
            Reading::Text(_) => "string",
            Reading::Bool(_) => "boolean",
            Reading::Null => "null",
            Reading::List(_) => "array",
            Reading::Object(_) => "object",
            Reading::Missing => "undefined",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Reading::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(value) => write!(f, "{}", value),
            Reading::Text(text) => f.write_str(text),
            Reading::Bool(flag) => write!(f, "{}", flag),
            Reading::Null => f.write_str("null"),
            Reading::Missing => f.write_str("undefined"),
            Reading::Object(_) => f.write_str("[object Object]"),
            Reading::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // null and undefined elements render empty
                    if !matches!(item, Reading::Null | Reading::Missing) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<bool> for Reading {
    fn from(flag: bool) -> Self {
        Reading::Bool(flag)
    }
}

impl From<&str> for Reading {
    fn from(text: &str) -> Self {
        Reading::Text(text.to_string())
    }
}

impl From<String> for Reading {
    fn from(text: String) -> Self {
        Reading::Text(text)
    }
}

impl<T: Into<Reading>> From<Option<T>> for Reading {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::Missing, Into::into)
    }
}

impl From<serde_json::Value> for Reading {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Reading::Null,
            Value::Bool(flag) => Reading::Bool(flag),
            Value::Number(n) => match n.as_f64() {
                Some(value) => Reading::Number(value),
                None => Reading::Text(n.to_string()),
            },
            Value::String(text) => Reading::Text(text),
            Value::Array(items) => Reading::List(items.into_iter().map(Reading::from).collect()),
            Value::Object(map) => Reading::Object(map),
        }
    }
}

/// A validated, positive and finite measurement. Only obtainable through validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Measurement(f64);

impl Measurement {
    pub fn new(param: Parameter, value: f64) -> Result<Self> {
        validate_positive_finite(param, value).map(Measurement)
    }

    pub fn from_reading(param: Parameter, reading: &Reading) -> Result<Self> {
        validate_measurement(param, reading).map(Measurement)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    pub width: Measurement,
    pub height: Measurement,
    pub length: Measurement,
    pub mass: Measurement,
}

impl Package {
    /// Validates width, height, length and mass in that order, stopping at the first failure.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self> {
        Ok(Self {
            width: Measurement::new(Parameter::Width, width)?,
            height: Measurement::new(Parameter::Height, height)?,
            length: Measurement::new(Parameter::Length, length)?,
            mass: Measurement::new(Parameter::Mass, mass)?,
        })
    }

    /// Positional readings; absent trailing readings count as `Missing`.
    pub fn from_readings(readings: &[Reading]) -> Result<Self> {
        if readings.len() > Parameter::ALL.len() {
            tracing::warn!(
                "Ignoring {} extra reading(s) beyond mass",
                readings.len() - Parameter::ALL.len()
            );
        }

        let mut values = [0.0; 4];
        for (slot, (i, param)) in values.iter_mut().zip(Parameter::ALL.iter().enumerate()) {
            let reading = readings.get(i).unwrap_or(&Reading::Missing);
            *slot = validate_measurement(*param, reading)?;
        }

        let [width, height, length, mass] = values.map(Measurement);
        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    pub fn volume(&self) -> f64 {
        self.width.get() * self.height.get() * self.length.get()
    }

    pub fn is_bulky(&self) -> bool {
        self.volume() >= VOLUME_THRESHOLD
            || self.width.get() >= DIMENSION_THRESHOLD
            || self.height.get() >= DIMENSION_THRESHOLD
            || self.length.get() >= DIMENSION_THRESHOLD
    }

    pub fn is_heavy(&self) -> bool {
        self.mass.get() >= MASS_THRESHOLD
    }

    pub fn stack(&self) -> Stack {
        Stack::dispatch(self.is_bulky(), self.is_heavy())
    }

    pub fn classification(&self) -> Classification {
        let bulky = self.is_bulky();
        let heavy = self.is_heavy();
        Classification {
            stack: Stack::dispatch(bulky, heavy),
            volume: self.volume(),
            bulky,
            heavy,
        }
    }
}

/// Handling stack, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stack {
    Standard,
    Special,
    Rejected,
}

impl Stack {
    pub fn dispatch(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Stack::Rejected,
            (true, false) | (false, true) => Stack::Special,
            (false, false) => Stack::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Standard => "STANDARD",
            Stack::Special => "SPECIAL",
            Stack::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub stack: Stack,
    pub volume: f64,
    pub bulky: bool,
    pub heavy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SortError;

    #[test]
    fn test_reading_parse() {
        assert_eq!(Reading::parse("10"), Reading::Number(10.0));
        assert_eq!(Reading::parse(" 2.5 "), Reading::Number(2.5));
        assert_eq!(Reading::parse("-inf").as_number(), Some(f64::NEG_INFINITY));
        assert_eq!(Reading::parse("Infinity").as_number(), Some(f64::INFINITY));
        assert!(Reading::parse("NaN").as_number().is_some_and(f64::is_nan));
        assert_eq!(Reading::parse("ten"), Reading::Text("ten".to_string()));
    }

    #[test]
    fn test_reading_type_and_string_form() {
        let list = Reading::from(serde_json::json!([10, null, "a"]));
        assert_eq!(list.type_name(), "array");
        assert_eq!(list.to_string(), "10,,a");

        let object = Reading::from(serde_json::json!({ "w": 10 }));
        assert_eq!(object.type_name(), "object");
        assert_eq!(object.to_string(), "[object Object]");

        assert_eq!(Reading::from(None::<f64>), Reading::Missing);
        assert_eq!(Reading::Missing.to_string(), "undefined");
        assert_eq!(Reading::from(true).to_string(), "true");
    }

    #[test]
    fn test_package_from_short_readings() {
        let readings = [Reading::from(10.0), Reading::from(10.0), Reading::from(10.0)];
        match Package::from_readings(&readings) {
            Err(SortError::InvalidType {
                param,
                received_type,
                ..
            }) => {
                assert_eq!(param, Parameter::Mass);
                assert_eq!(received_type, "undefined");
            }
            other => panic!("expected missing mass, got {:?}", other),
        }
    }

    #[test]
    fn test_package_ignores_extra_readings() {
        let readings: Vec<Reading> = [10.0, 10.0, 10.0, 5.0, -1.0]
            .into_iter()
            .map(Reading::from)
            .collect();
        let package = Package::from_readings(&readings).unwrap();
        assert_eq!(package.mass.get(), 5.0);
    }

    #[test]
    fn test_stack_dispatch_and_order() {
        assert_eq!(Stack::dispatch(false, false), Stack::Standard);
        assert_eq!(Stack::dispatch(true, false), Stack::Special);
        assert_eq!(Stack::dispatch(false, true), Stack::Special);
        assert_eq!(Stack::dispatch(true, true), Stack::Rejected);
        assert!(Stack::Standard < Stack::Special && Stack::Special < Stack::Rejected);
    }

    #[test]
    fn test_classification_serializes() {
        let package = Package::new(100.0, 100.0, 100.0, 10.0).unwrap();
        let json = serde_json::to_value(package.classification()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stack": "SPECIAL",
                "volume": 1_000_000.0,
                "bulky": true,
                "heavy": false
            })
        );
    }
}
