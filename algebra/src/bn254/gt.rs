use crate::bn254::{BN254PairingEngine, BN254Scalar};
use crate::prelude::*;

target_group_wrapper!(
    /// The wrapped struct for `ark_bn254::Fq12`, which is the pairing result
    BN254Gt,
    ark_bn254::Fq12,
    BN254Scalar,
    BN254PairingEngine,
    384
);
