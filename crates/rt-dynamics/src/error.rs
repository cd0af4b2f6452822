use rt_control::ControlError;
use rt_wire::WireError;
use thiserror::Error;

pub type DynamicsResult<T> = Result<T, DynamicsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DynamicsError {
    /// Control-bound construction failed (bad arity, inverted or
    /// non-finite limits).
    #[error(transparent)]
    Bound(#[from] ControlError),

    /// Parameter list arity does not match what the model expects.
    #[error("{model}: bound parameter list has wrong size (expected {expected}, got {got})")]
    BadParamCount {
        model: &'static str,
        expected: usize,
        got: usize,
    },

    /// A model constant is outside its physical range.
    #[error("{what} must be non-negative and finite: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// The model does not implement this operation. Callers must branch
    /// on this rather than receive a fabricated numeric result.
    #[error("{model}: {operation} is not implemented")]
    Unimplemented {
        model: &'static str,
        operation: &'static str,
    },

    /// A wire record failed validation.
    #[error(transparent)]
    Wire(#[from] WireError),
}
