//! Common capability surface of vehicle states.

/// A vehicle configuration as seen by the dynamics layer.
///
/// Implementations are immutable value types. `to_vector`/`from_vector`
/// expose the coordinates as a raw nalgebra vector; this is the shape in
/// which state derivatives and value-function gradients travel, since
/// those are unconstrained reals and must not pass through the
/// canonicalizing constructors.
pub trait VehicleState: Clone + Send + Sync {
    /// Raw coordinate vector (fixed-size where the state dimension is
    /// known statically, `DVector` otherwise).
    type Vector: Clone + Send + Sync;

    /// Number of state coordinates.
    fn dim(&self) -> usize;

    /// Coordinates as a raw vector.
    fn to_vector(&self) -> Self::Vector;

    /// Rebuild a state from raw coordinates, re-canonicalizing as needed.
    fn from_vector(v: &Self::Vector) -> Self;
}
