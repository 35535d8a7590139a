use crate::bn254::BN254Scalar;
use crate::prelude::*;

curve_group_wrapper!(
    /// The wrapped struct for `ark_bn254::G2Projective`
    BN254G2,
    ark_bn254::G2Projective,
    ark_bn254::G2Affine,
    BN254Scalar,
    64
);
