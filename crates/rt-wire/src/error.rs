use thiserror::Error;

pub type WireResult<T> = Result<T, WireError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    #[error("Unsupported wire version {got} (this build supports up to {supported})")]
    UnsupportedVersion { got: u32, supported: u32 },

    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Negative value for {field}: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Inverted limits for {field}: lower {lower} > upper {upper}")]
    InvertedLimits {
        field: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("Speed vectors have mismatched lengths: min {min_len}, max {max_len}")]
    LengthMismatch { min_len: usize, max_len: usize },

    #[error("Empty speed vectors")]
    Empty,
}
