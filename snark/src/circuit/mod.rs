use crate::errors::{Result, SnarkError};
use quill_algebra::prelude::*;

/// Module for the dense R1CS.
pub mod r1cs;

/// Module for the polynomial-evaluation circuit builder.
pub mod polynomial;

pub use polynomial::{build_polynomial_circuit, PolynomialClaim};
pub use r1cs::{Matrix, R1CS};

/// Variable index
pub type VarIndex = usize;
/// Constraint index
pub type CsIndex = usize;

/// Trait for rank-1 constraint systems: rows `k` with (A_k·w)·(B_k·w) = C_k·w.
pub trait ConstraintSystem {
    /// The scalar field of the constraint system.
    type Field: Scalar;

    /// Return the number of constraints in the system.
    fn size(&self) -> usize;

    /// Return number of variables in the constraint system, the constant wire included.
    fn num_vars(&self) -> usize;

    /// Borrow row `k` of one of the three matrices.
    fn row(&self, matrix: Matrix, k: CsIndex) -> &[Self::Field];

    /// Copy column `j` of one of the three matrices, one entry per constraint.
    fn column(&self, matrix: Matrix, j: VarIndex) -> Vec<Self::Field> {
        (0..self.size()).map(|k| self.row(matrix, k)[j]).collect()
    }

    /// The residual (A_k·w)·(B_k·w) − C_k·w of row `k`. Zero iff the row is satisfied.
    fn residual(&self, k: CsIndex, witness: &[Self::Field]) -> Self::Field {
        let dot = |matrix: Matrix| -> Self::Field {
            self.row(matrix, k)
                .iter()
                .zip(witness.iter())
                .filter(|(coef, _)| !coef.is_zero())
                .map(|(coef, value)| coef.mul(value))
                .sum()
        };
        dot(Matrix::A).mul(&dot(Matrix::B)).sub(&dot(Matrix::C))
    }

    /// Check a witness against every constraint, reporting the first violated row.
    fn verify_witness(&self, witness: &[Self::Field]) -> Result<()> {
        if witness.len() != self.num_vars() {
            return Err(SnarkError::WitnessLengthError {
                expected: self.num_vars(),
                found: witness.len(),
            });
        }
        match (0..self.size()).find(|k| !self.residual(*k, witness).is_zero()) {
            Some(k) => Err(SnarkError::UnsatisfiedConstraint(k)),
            None => Ok(()),
        }
    }

    /// Whether the witness satisfies every constraint.
    fn is_satisfied(&self, witness: &[Self::Field]) -> bool {
        self.verify_witness(witness).is_ok()
    }
}
