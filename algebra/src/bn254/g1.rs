use crate::bn254::BN254Scalar;
use crate::prelude::*;

curve_group_wrapper!(
    /// The wrapped struct for `ark_bn254::G1Projective`
    BN254G1,
    ark_bn254::G1Projective,
    ark_bn254::G1Affine,
    BN254Scalar,
    32
);
