/// Module for the dense field polynomial type.
pub mod field_polynomial;

/// Module for Lagrange interpolation and vanishing polynomials.
pub mod interpolation;

pub use field_polynomial::FpPolynomial;
pub use interpolation::{interpolate, vanishing_polynomial};
