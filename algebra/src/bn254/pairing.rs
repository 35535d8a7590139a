use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;

pairing_engine!(
    /// The pairing engine for BN254
    BN254PairingEngine,
    ark_bn254::Bn254,
    "bn254",
    BN254Scalar,
    BN254G1,
    BN254G2,
    BN254Gt
);
