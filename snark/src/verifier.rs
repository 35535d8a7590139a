use crate::errors::Result;
use crate::proof::Proof;
use crate::setup::vanishing_in_g2;
use ark_std::fmt;
use quill_algebra::prelude::*;
use tracing::{debug, instrument};

/// The outcome of a verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The pairing equation holds.
    Accept,
    /// It does not.
    Reject,
}

impl Verdict {
    /// Whether the proof was accepted.
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accept => f.write_str("ACCEPT"),
            Verdict::Reject => f.write_str("REJECT"),
        }
    }
}

/// Check e(π_A, π_B) = e(π_C, g2) · e(π_H, g2^{Z(τ)}).
///
/// g2^{Z(τ)} is rebuilt from the powers of τ carried by the proof and the coefficients
/// of the vanishing polynomial of 1..=m. The first power must be the carried base g2
/// itself. Errors only on malformed input, a failing check is a `Reject`.
#[instrument(skip_all, fields(curve = P::NAME, n_cons = proof.num_constraints()))]
pub fn verifier<P: Pairing>(proof: &Proof<P>) -> Result<Verdict> {
    let g2_z = vanishing_in_g2::<P>(&proof.g2_tau)?;
    if proof.g2_tau[0] != proof.g2 {
        debug!("g2^(tau^0) differs from the G2 base");
        return Ok(Verdict::Reject);
    }

    let lhs = P::pairing(&proof.pi_a, &proof.pi_b);
    let rhs = P::product_of_pairings(&[proof.pi_c, proof.pi_h], &[proof.g2, g2_z]);

    let verdict = if lhs == rhs {
        Verdict::Accept
    } else {
        Verdict::Reject
    };
    debug!(%verdict, "pairing check done");
    Ok(verdict)
}

/// Decode and verify an encoded proof.
pub fn verify_bytes<P: Pairing>(bytes: &[u8]) -> Result<Verdict> {
    verifier(&Proof::<P>::from_bytes(bytes)?)
}
