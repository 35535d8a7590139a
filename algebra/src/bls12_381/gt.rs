use crate::bls12_381::{BLSPairingEngine, BLSScalar};
use crate::prelude::*;

target_group_wrapper!(
    /// The wrapped struct for `ark_bls12_381::Fq12`, which is the pairing result
    BLSGt,
    ark_bls12_381::Fq12,
    BLSScalar,
    BLSPairingEngine,
    576
);
