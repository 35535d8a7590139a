use crate::circuit::{Matrix, R1CS};
use crate::errors::{Result, SnarkError};
use quill_algebra::prelude::*;
use tracing::debug;

/// The claim "y = Σ aᵢ xⁱ" for a polynomial of degree `degree`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialClaim<F> {
    /// Degree d of the polynomial.
    pub degree: usize,
    /// Coefficients a₀..a_d.
    pub coefs: Vec<F>,
    /// Evaluation point.
    pub x: F,
    /// Claimed value.
    pub y: F,
}

impl<F: Scalar> PolynomialClaim<F> {
    /// Create a claim, checking that there are exactly `degree + 1` coefficients.
    pub fn new(degree: usize, coefs: Vec<F>, x: F, y: F) -> Result<Self> {
        if coefs.len() != degree + 1 {
            return Err(SnarkError::CoefficientCountError {
                expected: degree + 1,
                found: coefs.len(),
            });
        }
        Ok(Self { degree, coefs, x, y })
    }

    /// Whether y really is the value of the polynomial at x.
    pub fn holds(&self) -> bool {
        let value = self
            .coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, a| acc.mul(&self.x).add(a));
        value == self.y
    }

    /// Number of variables of the circuit: the powers x⁰..x^d and the running sums s₀..s_d.
    pub fn num_vars(&self) -> usize {
        2 * (self.degree + 1)
    }

    /// Number of constraints: 2d + 1, or 2 when d = 0.
    pub fn num_constraints(&self) -> usize {
        if self.degree > 0 {
            2 * self.degree + 1
        } else {
            2
        }
    }

    /// Index of the wire holding the running sum sᵢ.
    pub fn sum_wire(&self, i: usize) -> usize {
        self.degree + 1 + i
    }

    /// Build the R1CS and its witness.
    ///
    /// Wires 0..=d hold xⁱ (wire 0 is the constant 1), wires d+1..=2d+1 hold the running
    /// sums sᵢ = Σ_{j≤i} aⱼxʲ. The rows, in order:
    ///
    /// * `(a₀·w₀)·w₀ = s₀`
    /// * `wᵢ·w₁ = wᵢ₊₁` for i = 1..d−1
    /// * `(sᵢ₋₁ + aᵢ·wᵢ)·w₀ = sᵢ` for i = 1..d
    /// * `s_d·w₀ = y·w₀`
    ///
    /// The witness is computed honestly from x, so it satisfies every row except possibly
    /// the last, which holds exactly when the claim does.
    pub fn build(&self) -> Result<(R1CS<F>, Vec<F>)> {
        let d = self.degree;
        let one = F::one();
        let mut cs = R1CS::new(self.num_vars(), self.num_constraints());

        let mut witness = Vec::with_capacity(self.num_vars());
        let mut power = one;
        for _ in 0..=d {
            witness.push(power);
            power.mul_assign(&self.x);
        }
        let mut sum = F::zero();
        for i in 0..=d {
            sum.add_assign(&self.coefs[i].mul(&witness[i]));
            witness.push(sum);
        }

        let mut k = 0;
        cs.set(Matrix::A, k, 0, self.coefs[0])?;
        cs.set(Matrix::B, k, 0, one)?;
        cs.set(Matrix::C, k, self.sum_wire(0), one)?;
        k += 1;

        for i in 1..d {
            cs.set(Matrix::A, k, i, one)?;
            cs.set(Matrix::B, k, 1, one)?;
            cs.set(Matrix::C, k, i + 1, one)?;
            k += 1;
        }

        for i in 1..=d {
            cs.set(Matrix::A, k, self.sum_wire(i - 1), one)?;
            cs.set(Matrix::A, k, i, self.coefs[i])?;
            cs.set(Matrix::B, k, 0, one)?;
            cs.set(Matrix::C, k, self.sum_wire(i), one)?;
            k += 1;
        }

        cs.set(Matrix::A, k, self.sum_wire(d), one)?;
        cs.set(Matrix::B, k, 0, one)?;
        cs.set(Matrix::C, k, 0, self.y)?;

        debug!(
            degree = d,
            n_vars = self.num_vars(),
            n_cons = self.num_constraints(),
            "built polynomial circuit"
        );
        Ok((cs, witness))
    }
}

/// Build the R1CS and witness for "y = Σ aᵢ xⁱ" with `coefs = [a₀, …, a_d]`.
pub fn build_polynomial_circuit<F: Scalar>(
    degree: usize,
    coefs: &[F],
    x: &F,
    y: &F,
) -> Result<(R1CS<F>, Vec<F>)> {
    PolynomialClaim::new(degree, coefs.to_vec(), *x, *y)?.build()
}

#[cfg(test)]
mod test {
    use crate::circuit::{build_polynomial_circuit, ConstraintSystem, Matrix, PolynomialClaim};
    use crate::errors::SnarkError;
    use quill_algebra::{bls12_381::BLSScalar, bn254::BN254Scalar, prelude::*};

    fn eval<F: Scalar>(coefs: &[F], x: &F) -> F {
        coefs.iter().rev().fold(F::zero(), |acc, a| acc.mul(x).add(a))
    }

    fn honest_claims_are_satisfied<F: Scalar>() {
        let mut prng = test_rng();
        for d in 0..6 {
            let coefs: Vec<F> = (0..=d).map(|_| F::random(&mut prng)).collect();
            let x = F::random(&mut prng);
            let y = eval(&coefs, &x);
            let (cs, w) = build_polynomial_circuit(d, &coefs, &x, &y).unwrap();
            assert_eq!(cs.num_vars(), 2 * (d + 1));
            assert_eq!(cs.size(), if d > 0 { 2 * d + 1 } else { 2 });
            assert_eq!(w.len(), cs.num_vars());
            assert_eq!(w[0], F::one());
            assert_eq!(w[2 * d + 1], y);
            cs.verify_witness(&w).unwrap();
        }
    }

    #[test]
    fn builder_satisfies_every_row() {
        honest_claims_are_satisfied::<BLSScalar>();
        honest_claims_are_satisfied::<BN254Scalar>();
    }

    #[test]
    fn wrong_claim_breaks_only_the_closing_row() {
        let c = |v: u32| BN254Scalar::from(v);
        // 3 + 2x + x^2 at x = 5 is 38
        let coefs = [c(3), c(2), c(1)];
        let (cs, w) = build_polynomial_circuit(2, &coefs, &c(5), &c(39)).unwrap();
        assert_eq!(cs.unsatisfied_rows(&w), vec![cs.size() - 1]);

        let claim = PolynomialClaim::new(2, coefs.to_vec(), c(5), c(38)).unwrap();
        assert!(claim.holds());
        let (cs, w) = claim.build().unwrap();
        assert!(cs.is_satisfied(&w));
    }

    #[test]
    fn linear_layout() {
        let c = |v: u32| BLSScalar::from(v);
        // y = 3 + 2x at x = 4
        let (cs, w) = build_polynomial_circuit(1, &[c(3), c(2)], &c(4), &c(11)).unwrap();
        assert_eq!(cs.size(), 3);
        assert_eq!(w, vec![c(1), c(4), c(3), c(11)]);

        assert_eq!(cs.row(Matrix::A, 0), &[c(3), c(0), c(0), c(0)]);
        assert_eq!(cs.row(Matrix::C, 0), &[c(0), c(0), c(1), c(0)]);
        assert_eq!(cs.row(Matrix::A, 1), &[c(0), c(2), c(1), c(0)]);
        assert_eq!(cs.row(Matrix::C, 1), &[c(0), c(0), c(0), c(1)]);
        assert_eq!(cs.row(Matrix::A, 2), &[c(0), c(0), c(0), c(1)]);
        assert_eq!(cs.row(Matrix::C, 2), &[c(11), c(0), c(0), c(0)]);
        for k in 0..3 {
            assert_eq!(cs.row(Matrix::B, k), &[c(1), c(0), c(0), c(0)]);
        }
    }

    #[test]
    fn constant_polynomial() {
        let c = |v: u32| BLSScalar::from(v);
        let (cs, w) = build_polynomial_circuit(0, &[c(7)], &c(100), &c(7)).unwrap();
        assert_eq!(cs.num_vars(), 2);
        assert_eq!(cs.size(), 2);
        assert_eq!(w, vec![c(1), c(7)]);
        assert!(cs.is_satisfied(&w));

        let (cs, w) = build_polynomial_circuit(0, &[c(7)], &c(100), &c(8)).unwrap();
        assert_eq!(cs.unsatisfied_rows(&w), vec![1]);
    }

    #[test]
    fn coefficient_count_is_checked() {
        let c = |v: u32| BLSScalar::from(v);
        assert_eq!(
            build_polynomial_circuit(2, &[c(1), c(2)], &c(1), &c(3)),
            Err(SnarkError::CoefficientCountError {
                expected: 3,
                found: 2
            })
        );
    }
}
