use crate::circuit::{ConstraintSystem, Matrix};
use crate::errors::{Result, SnarkError};
use crate::poly::{interpolate, vanishing_polynomial, FpPolynomial};
use quill_algebra::prelude::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

/// The constraint points τₖ = 1..=m and their vanishing polynomial.
///
/// Setup, prover and verifier all derive the domain from m alone, which is what lets the
/// verifier rebuild g2^{Z(τ)} from the proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain<F> {
    points: Vec<F>,
    vanishing: FpPolynomial<F>,
}

impl<F: Scalar> EvaluationDomain<F> {
    /// The domain of a system with `size` constraints.
    pub fn new(size: usize) -> Self {
        let points: Vec<F> = (1..=size as u64).map(F::from).collect();
        let vanishing = vanishing_polynomial(&points);
        Self { points, vanishing }
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// The points τ₁..τₘ.
    pub fn points(&self) -> &[F] {
        &self.points
    }

    /// Z(X) = Π (X − τₖ), with `size() + 1` coefficients.
    pub fn vanishing_polynomial(&self) -> &FpPolynomial<F> {
        &self.vanishing
    }

    /// Z(τ) computed directly as the product Π (τ − τₖ).
    pub fn eval_vanishing(&self, tau: &F) -> F {
        self.points
            .iter()
            .fold(F::one(), |acc, point| acc.mul(&tau.sub(point)))
    }

    /// Whether `tau` is one of the points.
    pub fn contains(&self, tau: &F) -> bool {
        self.points.iter().any(|point| point == tau)
    }
}

/// A(τ), B(τ), C(τ) for every variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapEvaluation<F> {
    /// Aⱼ(τ) per variable j.
    pub a: Vec<F>,
    /// Bⱼ(τ) per variable j.
    pub b: Vec<F>,
    /// Cⱼ(τ) per variable j.
    pub c: Vec<F>,
}

impl<F: Scalar> QapEvaluation<F> {
    /// The inner products Σ wⱼAⱼ(τ), Σ wⱼBⱼ(τ), Σ wⱼCⱼ(τ).
    pub fn aggregate(&self, witness: &[F]) -> Result<(F, F, F)> {
        if witness.len() != self.a.len() {
            return Err(SnarkError::WitnessLengthError {
                expected: self.a.len(),
                found: witness.len(),
            });
        }
        let inner = |values: &[F]| -> F {
            values
                .iter()
                .zip(witness.iter())
                .map(|(v, w)| v.mul(w))
                .sum()
        };
        Ok((inner(&self.a), inner(&self.b), inner(&self.c)))
    }
}

/// The aggregated QAP values at a secret point τ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapAggregates<F> {
    /// A(τ) = Σ wⱼAⱼ(τ).
    pub a: F,
    /// B(τ) = Σ wⱼBⱼ(τ).
    pub b: F,
    /// C(τ) = Σ wⱼCⱼ(τ).
    pub c: F,
    /// H(τ), H being the quotient of A(X)·B(X) − C(X) by Z(X).
    pub h: F,
    /// Z(τ).
    pub z: F,
    /// Whether the division left no remainder, i.e. the witness satisfies the system.
    pub divisible: bool,
}

/// Quadratic arithmetic program: the interpolated columns of the three R1CS matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Qap<F> {
    domain: EvaluationDomain<F>,
    a: Vec<FpPolynomial<F>>,
    b: Vec<FpPolynomial<F>>,
    c: Vec<FpPolynomial<F>>,
}

impl<F: Scalar> Qap<F> {
    /// Interpolate, for every variable j, the columns j of A, B and C through the
    /// points 1..=m.
    #[instrument(skip_all, fields(n_vars = cs.num_vars(), n_cons = cs.size()))]
    pub fn compile<CS>(cs: &CS) -> Result<Self>
    where
        CS: ConstraintSystem<Field = F> + Sync,
    {
        let domain = EvaluationDomain::new(cs.size());
        let interpolate_column = |j: usize| -> Result<[FpPolynomial<F>; 3]> {
            Ok([
                interpolate(domain.points(), &cs.column(Matrix::A, j))?,
                interpolate(domain.points(), &cs.column(Matrix::B, j))?,
                interpolate(domain.points(), &cs.column(Matrix::C, j))?,
            ])
        };

        #[cfg(feature = "parallel")]
        let columns = (0..cs.num_vars())
            .into_par_iter()
            .map(interpolate_column)
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let columns = (0..cs.num_vars())
            .map(interpolate_column)
            .collect::<Result<Vec<_>>>()?;

        let n_vars = columns.len();
        let mut a = Vec::with_capacity(n_vars);
        let mut b = Vec::with_capacity(n_vars);
        let mut c = Vec::with_capacity(n_vars);
        for [pa, pb, pc] in columns {
            a.push(pa);
            b.push(pb);
            c.push(pc);
        }
        debug!("interpolated {} column polynomials", 3 * n_vars);
        Ok(Self { domain, a, b, c })
    }

    /// The constraint points.
    pub fn domain(&self) -> &EvaluationDomain<F> {
        &self.domain
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.a.len()
    }

    /// (Aⱼ, Bⱼ, Cⱼ) for variable `j`.
    pub fn column_polynomials(
        &self,
        j: usize,
    ) -> Option<(&FpPolynomial<F>, &FpPolynomial<F>, &FpPolynomial<F>)> {
        Some((self.a.get(j)?, self.b.get(j)?, self.c.get(j)?))
    }

    /// Evaluate every column polynomial at `tau`.
    pub fn evaluate_at(&self, tau: &F) -> QapEvaluation<F> {
        let eval_all = |polys: &[FpPolynomial<F>]| -> Vec<F> {
            polys.iter().map(|p| p.eval(tau)).collect()
        };
        QapEvaluation {
            a: eval_all(&self.a),
            b: eval_all(&self.b),
            c: eval_all(&self.c),
        }
    }

    /// A(X) = Σ wⱼAⱼ(X), B(X) and C(X).
    pub fn aggregate(
        &self,
        witness: &[F],
    ) -> Result<(FpPolynomial<F>, FpPolynomial<F>, FpPolynomial<F>)> {
        if witness.len() != self.num_vars() {
            return Err(SnarkError::WitnessLengthError {
                expected: self.num_vars(),
                found: witness.len(),
            });
        }
        let combine = |polys: &[FpPolynomial<F>]| -> FpPolynomial<F> {
            let mut acc = FpPolynomial::zero();
            for (p, w) in polys.iter().zip(witness.iter()) {
                if !w.is_zero() && !p.is_zero() {
                    acc.add_assign(&p.mul_scalar(w));
                }
            }
            acc
        };
        Ok((combine(&self.a), combine(&self.b), combine(&self.c)))
    }

    /// Divide A(X)·B(X) − C(X) by Z(X), returning (H, remainder).
    pub fn quotient(&self, witness: &[F]) -> Result<(FpPolynomial<F>, FpPolynomial<F>)> {
        let (a, b, c) = self.aggregate(witness)?;
        a.mul(&b).sub(&c).div_rem(self.domain.vanishing_polynomial())
    }

    /// Every aggregate the prover and the setup self-check need, at `tau`.
    ///
    /// A, B and C are the inner products of the witness with the per-variable values at
    /// `tau`. H is the polynomial quotient evaluated at `tau`, so it only satisfies
    /// H·Z = A·B − C when the witness does.
    pub fn aggregates_at(&self, witness: &[F], tau: &F) -> Result<QapAggregates<F>> {
        let z = self.domain.eval_vanishing(tau);
        if z.is_zero() {
            return Err(SnarkError::TauCollision);
        }
        let (a, b, c) = self.evaluate_at(tau).aggregate(witness)?;
        let (h_poly, rem) = self.quotient(witness)?;
        let h = h_poly.eval(tau);
        let divisible = rem.is_zero();
        if divisible && h.mul(&z) != a.mul(&b).sub(&c) {
            return Err(SnarkError::QapDivisibilityError);
        }
        Ok(QapAggregates {
            a,
            b,
            c,
            h,
            z,
            divisible,
        })
    }
}
