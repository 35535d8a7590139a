use crate::bn254::BN254_SCALAR_LEN;
use crate::prelude::*;

scalar_wrapper!(
    /// The wrapped struct for `ark_bn254::Fr`
    BN254Scalar,
    ark_bn254::Fr,
    BN254_SCALAR_LEN
);
