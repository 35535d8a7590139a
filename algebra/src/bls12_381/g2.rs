use crate::bls12_381::BLSScalar;
use crate::prelude::*;

curve_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::G2Projective`
    BLSG2,
    ark_bls12_381::G2Projective,
    ark_bls12_381::G2Affine,
    BLSScalar,
    96
);
