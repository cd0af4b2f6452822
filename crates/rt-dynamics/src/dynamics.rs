//! The dynamics contract.

use crate::error::DynamicsResult;
use rt_control::ControlBound;
use rt_state::VehicleState;

/// A vehicle dynamics model: state derivative plus safety-optimal
/// control synthesis, behind one contract so planners and reachability
/// solvers can hold any vehicle class.
///
/// Implementations are fully configured at construction (there is no
/// separate initialize step and therefore no uninitialized state to
/// guard against) and immutable afterwards, so every method here is safe
/// to call concurrently without locks.
pub trait Dynamics: Send + Sync {
    /// Vehicle configuration type.
    type State: VehicleState;
    /// Control input type.
    type Control;
    /// Wire-format record carrying the model's tunable parameters.
    type Config;

    /// Time derivative of the state at `(x, u)`.
    ///
    /// Pure and deterministic. Does NOT clamp or reject controls outside
    /// the admissible set: bound enforcement belongs to the planning
    /// layer, and a derivative query with a hypothetical out-of-bound
    /// control is legitimate.
    fn evaluate(
        &self,
        x: &Self::State,
        u: &Self::Control,
    ) -> <Self::State as VehicleState>::Vector;

    /// The admissible control extremizing the safety Hamiltonian
    /// `<value_gradient, evaluate(x, u)>` at `x`.
    ///
    /// `value_gradient` is the spatial gradient of the externally
    /// computed safety value function, as a raw coordinate vector. For
    /// control-affine models with state-independent bounds the result
    /// does not depend on `x` (a documented simplification, not a
    /// general requirement). The returned control always lies inside the
    /// model's bound.
    ///
    /// Models without a Hamiltonian law return
    /// [`DynamicsError::Unimplemented`](crate::DynamicsError::Unimplemented).
    fn optimal_control(
        &self,
        x: &Self::State,
        value_gradient: &<Self::State as VehicleState>::Vector,
    ) -> DynamicsResult<Self::Control>;

    /// The admissible control set this model was configured with.
    fn control_bound(&self) -> &dyn ControlBound<Self::Control>;

    /// Tunable parameters as a wire record. Lossless within
    /// floating-point precision: `from_config(&to_config())` reproduces
    /// the same effective parameters.
    fn to_config(&self) -> Self::Config;

    /// Build a model from a wire record, validating it first.
    fn from_config(config: &Self::Config) -> DynamicsResult<Self>
    where
        Self: Sized;
}
