use crate::errors::{Result, SnarkError};
use crate::poly::FpPolynomial;
use quill_algebra::prelude::*;

/// Lagrange interpolation through `(points[k], values[k])`.
///
/// The result has degree below `points.len()`. Each basis numerator Π_{j≠k}(X − τⱼ) is
/// built by multiplying in one linear factor at a time and is scaled by
/// `values[k] / Π_{j≠k}(τₖ − τⱼ)`.
pub fn interpolate<F: Scalar>(points: &[F], values: &[F]) -> Result<FpPolynomial<F>> {
    if points.len() != values.len() {
        return Err(SnarkError::FuncParamsError);
    }
    check_distinct(points)?;

    let mut result = FpPolynomial::zero();
    for (k, (tau_k, value)) in points.iter().zip(values.iter()).enumerate() {
        if value.is_zero() {
            continue;
        }
        let mut numerator = FpPolynomial::one();
        let mut denominator = F::one();
        for (j, tau_j) in points.iter().enumerate() {
            if j == k {
                continue;
            }
            numerator.mul_linear_assign(tau_j);
            denominator.mul_assign(&tau_k.sub(tau_j));
        }
        let scale = value.mul(&denominator.inv()?);
        numerator.mul_scalar_assign(&scale);
        result.add_assign(&numerator);
    }
    Ok(result)
}

/// The vanishing polynomial Z(X) = Π (X − τₖ) of the points, monic of degree
/// `points.len()`.
pub fn vanishing_polynomial<F: Scalar>(points: &[F]) -> FpPolynomial<F> {
    FpPolynomial::from_zeroes(points)
}

fn check_distinct<F: Scalar>(points: &[F]) -> Result<()> {
    for (k, tau_k) in points.iter().enumerate() {
        if points[..k].iter().any(|tau_j| tau_j == tau_k) {
            return Err(SnarkError::DuplicateInterpolationPoint(k));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::errors::SnarkError;
    use crate::poly::{interpolate, vanishing_polynomial, FpPolynomial};
    use quill_algebra::{bls12_381::BLSScalar, bn254::BN254Scalar, prelude::*};

    fn reproduces_values<F: Scalar>() {
        let mut prng = test_rng();
        for m in [1usize, 2, 5, 9] {
            let points: Vec<F> = (1..=m as u64).map(F::from).collect();
            let values: Vec<F> = (0..m).map(|_| F::random(&mut prng)).collect();
            let poly = interpolate(&points, &values).unwrap();
            assert!(poly.degree() < m);
            for (p, v) in points.iter().zip(values.iter()) {
                assert_eq!(poly.eval(p), *v);
            }
        }
    }

    #[test]
    fn interpolate_reproduces_values() {
        reproduces_values::<BLSScalar>();
        reproduces_values::<BN254Scalar>();
    }

    #[test]
    fn interpolate_sparse_column() {
        let c = |v: u64| BLSScalar::from(v);
        let points = vec![c(1), c(2), c(3)];
        let values = vec![c(0), c(1), c(0)];
        let poly = interpolate(&points, &values).unwrap();
        // L_2(x) = (x - 1)(x - 3) / ((2 - 1)(2 - 3)) = -x^2 + 4x - 3
        let expected = FpPolynomial::from_coefs(vec![c(3).neg(), c(4), c(1).neg()]);
        assert_eq!(poly, expected);

        let zero = interpolate(&points, &[c(0), c(0), c(0)]).unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn interpolate_rejects_bad_input() {
        let c = |v: u64| BN254Scalar::from(v);
        assert_eq!(
            interpolate(&[c(1), c(2), c(1)], &[c(1), c(1), c(1)]),
            Err(SnarkError::DuplicateInterpolationPoint(2))
        );
        assert_eq!(
            interpolate(&[c(1), c(2)], &[c(1)]),
            Err(SnarkError::FuncParamsError)
        );
    }

    #[test]
    fn vanishing_on_points() {
        let points: Vec<BLSScalar> = (1..=6u64).map(BLSScalar::from).collect();
        let z = vanishing_polynomial(&points);
        assert_eq!(z.coefs.len(), 7);
        assert_eq!(z.coefs[6], BLSScalar::one());
        for p in points.iter() {
            assert!(z.eval(p).is_zero());
        }
        assert!(!z.eval(&BLSScalar::from(7u32)).is_zero());

        // (x - 1)(x - 2) = x^2 - 3x + 2
        let z2 = vanishing_polynomial(&points[..2]);
        assert_eq!(
            z2.coefs,
            vec![BLSScalar::from(2u32), BLSScalar::from(3u32).neg(), BLSScalar::one()]
        );
    }
}
