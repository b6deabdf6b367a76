//! Validation failures raised while checking an imported lap dataset.

use std::error::Error;
use std::fmt;

/// Reasons a lap dataset is rejected. Each variant carries the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidDriverName(String),
    InvalidLapNumber(String),
    InvalidTimeFormat(String),
    InsufficientLaps { driver: String, count: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::InvalidDriverName(name) => {
                write!(f, "Invalid driver name: {}", name)
            }
            ValidationError::InvalidLapNumber(lap) => write!(f, "Invalid lap number: {}", lap),
            ValidationError::InvalidTimeFormat(time) => {
                write!(f, "Invalid time format: {}", time)
            }
            ValidationError::InsufficientLaps { driver, count } => write!(
                f,
                "Driver {} has fewer than 3 laps recorded ({} found)",
                driver, count
            ),
        }
    }
}

impl Error for ValidationError {}
