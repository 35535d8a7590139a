use crate::circuit::{ConstraintSystem, CsIndex, VarIndex};
use crate::errors::{Result, SnarkError};
use quill_algebra::prelude::*;

/// Selects one of the three R1CS matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matrix {
    /// The left input matrix.
    A,
    /// The right input matrix.
    B,
    /// The output matrix.
    C,
}

/// A rank-1 constraint system with dense `n_cons × n_vars` matrices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct R1CS<F> {
    n_vars: usize,
    n_cons: usize,
    a: Vec<Vec<F>>,
    b: Vec<Vec<F>>,
    c: Vec<Vec<F>>,
}

impl<F: Scalar> R1CS<F> {
    /// Create a system with all-zero matrices.
    pub fn new(n_vars: usize, n_cons: usize) -> Self {
        let zeros = vec![vec![F::zero(); n_vars]; n_cons];
        Self {
            n_vars,
            n_cons,
            a: zeros.clone(),
            b: zeros.clone(),
            c: zeros,
        }
    }

    fn matrix(&self, matrix: Matrix) -> &Vec<Vec<F>> {
        match matrix {
            Matrix::A => &self.a,
            Matrix::B => &self.b,
            Matrix::C => &self.c,
        }
    }

    /// Set one matrix entry.
    pub fn set(&mut self, matrix: Matrix, k: CsIndex, j: VarIndex, value: F) -> Result<()> {
        if k >= self.n_cons || j >= self.n_vars {
            return Err(SnarkError::Algebra(AlgebraError::IndexError));
        }
        let rows = match matrix {
            Matrix::A => &mut self.a,
            Matrix::B => &mut self.b,
            Matrix::C => &mut self.c,
        };
        rows[k][j] = value;
        Ok(())
    }

    /// Read one matrix entry.
    pub fn get(&self, matrix: Matrix, k: CsIndex, j: VarIndex) -> Option<&F> {
        self.matrix(matrix).get(k).and_then(|row| row.get(j))
    }

    /// The rows violated by the witness. Empty for a satisfying witness of the right length.
    pub fn unsatisfied_rows(&self, witness: &[F]) -> Vec<CsIndex> {
        (0..self.n_cons)
            .filter(|k| !self.residual(*k, witness).is_zero())
            .collect()
    }
}

impl<F: Scalar> ConstraintSystem for R1CS<F> {
    type Field = F;

    fn size(&self) -> usize {
        self.n_cons
    }

    fn num_vars(&self) -> usize {
        self.n_vars
    }

    fn row(&self, matrix: Matrix, k: CsIndex) -> &[F] {
        &self.matrix(matrix)[k]
    }
}
