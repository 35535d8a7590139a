//! Pairing-based succinct proofs for the statement "y is the value of the polynomial
//! Σ aᵢxⁱ at x".
//!
//! The pipeline is [`circuit`] (R1CS + witness) → [`qap`] (Lagrange interpolation of the
//! matrix columns) → [`setup`] (structured reference string) → [`prover`] → [`proof`]
//! (wire format) → [`verifier`] (one pairing equation).
#![warn(missing_docs)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::many_single_char_names)]

#[macro_use]
extern crate serde_derive;

/// Module for the polynomial-evaluation circuit and its R1CS.
pub mod circuit;

/// Module for error handling.
pub mod errors;

/// Module for field polynomials and interpolation.
pub mod poly;

/// Module for the proof object and its wire format.
pub mod proof;

/// Module for the prover.
pub mod prover;

/// Module for the quadratic arithmetic program.
pub mod qap;

/// Module for the trusted setup.
pub mod setup;

/// Module for the verifier.
pub mod verifier;
