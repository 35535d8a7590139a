//! The algebraic backend of Quill: the scalar field, the pairing groups and the
//! bilinear map, wrapped behind the [`traits::Scalar`], [`traits::Group`] and
//! [`traits::Pairing`] traits so that the protocol crates never touch a
//! concrete curve.
#![warn(missing_docs)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for the BN254 curve
pub mod bn254;

/// Module for error handling
pub mod errors;

/// Module for the opaque curve-parameter description
pub mod params;

/// Module for the prelude
pub mod prelude;

/// Module for test rngs
pub mod rand_helper;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

#[doc(hidden)]
pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
