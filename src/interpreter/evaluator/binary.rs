/// Operator dispatch.
pub mod core;
/// Arithmetic on integers and reals.
pub mod scalar;
/// Relational and equality operators.
pub mod comparison;
