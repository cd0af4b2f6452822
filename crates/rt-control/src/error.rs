use thiserror::Error;

pub type ControlResult<T> = Result<T, ControlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("Parameter list has wrong size: expected {expected}, got {got}")]
    BadParamCount { expected: String, got: usize },

    #[error("Non-finite bound parameter for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Inverted limits for {what}: lower {lower} > upper {upper}")]
    InvertedLimits {
        what: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("Dimension mismatch: {what} (expected {expected}, got {got})")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
