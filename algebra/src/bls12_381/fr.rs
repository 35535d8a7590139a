use crate::bls12_381::BLS12_381_SCALAR_LEN;
use crate::prelude::*;

scalar_wrapper!(
    /// The wrapped struct for `ark_bls12_381::Fr`
    BLSScalar,
    ark_bls12_381::Fr,
    BLS12_381_SCALAR_LEN
);
