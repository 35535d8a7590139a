use crate::errors::{Result, SnarkError};
use quill_algebra::prelude::*;

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order coefficient first.
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use quill_snark::poly::FpPolynomial;
    /// use quill_algebra::bls12_381::BLSScalar;
    /// use quill_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BLSScalar>::zero();
    /// let zero = BLSScalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&BLSScalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use quill_snark::poly::FpPolynomial;
    /// use quill_algebra::bn254::BN254Scalar;
    /// let c = |v: u32| BN254Scalar::from(v);
    /// let poly = FpPolynomial::from_coefs(vec![c(1), c(0), c(1), c(0), c(0)]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&c(2)), c(5));
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build the monic polynomial Π (X − zᵢ) from its zeroes, multiplying in one linear
    /// factor at a time.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            r.mul_linear_assign(root);
        }
        r
    }

    /// Multiply self by the linear factor (X − root).
    pub fn mul_linear_assign(&mut self, root: &F) {
        let mut shifted = Vec::with_capacity(self.coefs.len() + 1);
        shifted.push(F::zero());
        shifted.extend_from_slice(&self.coefs);
        for (i, coef) in self.coefs.iter().enumerate() {
            shifted[i].sub_assign(&coef.mul(root));
        }
        self.coefs = shifted;
        self.trim_coefs();
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate a polynomial on a point with Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Multiply the coefficients by a scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar);
        }
        self.trim_coefs();
    }

    /// Multiply by a scalar, producing a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Multiply two polynomials by convolution of their coefficients.
    /// # Example
    /// ```
    /// use quill_snark::poly::FpPolynomial;
    /// use quill_algebra::bls12_381::BLSScalar;
    /// use quill_algebra::ops::Neg;
    /// let c = |v: u32| BLSScalar::from(v);
    /// // (x + 1)(x - 1) = x^2 - 1
    /// let p = FpPolynomial::from_coefs(vec![c(1), c(1)]);
    /// let q = FpPolynomial::from_coefs(vec![c(1).neg(), c(1)]);
    /// assert_eq!(p.mul(&q), FpPolynomial::from_coefs(vec![c(1).neg(), c(0), c(1)]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Polynomial long division: return (quotient, remainder) such that
    /// self = quotient · divisor + remainder and deg(remainder) < deg(divisor).
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(SnarkError::DivisionByZero);
        }
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return Ok((Self::zero(), self.clone()));
        }
        let divisor_coefs = &divisor.coefs[..];
        let bl_inv = divisor_coefs[l - 1].inv()?;
        let mut rem = self.coefs.clone();
        let mut quo = vec![F::zero(); k - l + 1];
        for i in (0..(k - l + 1)).rev() {
            let qi = bl_inv.mul(&rem[i + l - 1]);
            for (j, d) in divisor_coefs.iter().enumerate() {
                rem[i + j].sub_assign(&qi.mul(d));
            }
            quo[i] = qi;
        }
        rem.truncate(l - 1);
        Ok((Self::from_coefs(quo), Self::from_coefs(rem)))
    }
}
