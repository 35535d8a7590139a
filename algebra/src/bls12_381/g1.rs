use crate::bls12_381::BLSScalar;
use crate::prelude::*;

curve_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::G1Projective`
    BLSG1,
    ark_bls12_381::G1Projective,
    ark_bls12_381::G1Affine,
    BLSScalar,
    48
);
