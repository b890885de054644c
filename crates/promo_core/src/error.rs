use std::fmt;

/// Errors raised by the promotion engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A required field was never configured before use.
    MissingConfig(&'static str),
    /// A configured value violates a stated bound.
    InvalidConfig { field: &'static str, value: f64 },
    /// `TimeWindow::set_current` was called with an instant outside the window.
    CurrentOutOfBounds { value: f64, start: f64, end: f64 },
    /// An inverse-CDF input fell outside `[0, 1]`.
    CdfValueOutOfBounds(f64),
    /// Rejection sampling failed to accept a candidate within its attempt
    /// budget. Indicates a density bound set too low for the configured
    /// density, not a transient condition; do not retry with the same setup.
    RejectionBudgetExhausted { attempts: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingConfig(field) => write!(f, "{field} not set"),
            EngineError::InvalidConfig { field, value } => {
                write!(f, "invalid value {value} for {field}")
            }
            EngineError::CurrentOutOfBounds { value, start, end } => {
                write!(f, "current instant {value} outside window [{start}, {end}]")
            }
            EngineError::CdfValueOutOfBounds(value) => {
                write!(f, "CDF value {value} outside [0, 1]")
            }
            EngineError::RejectionBudgetExhausted { attempts } => {
                write!(
                    f,
                    "rejection sampling exhausted {attempts} attempts; density bound is too low"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
