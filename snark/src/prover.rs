use crate::circuit::ConstraintSystem;
use crate::errors::Result;
use crate::proof::Proof;
use crate::qap::{Qap, QapAggregates};
use crate::setup::Trapdoor;
use quill_algebra::prelude::*;
use tracing::{instrument, warn};

/// Prove that `witness` satisfies `cs`.
///
/// The prover holds the trapdoor: it evaluates the aggregated QAP polynomials directly
/// at τ and lifts A, C, H into G1 and B into G2. H is the polynomial quotient of
/// A(X)·B(X) − C(X) by Z(X). A witness that violates the system leaves a remainder that
/// is dropped, so the resulting proof fails verification.
pub fn prover<P, CS>(
    cs: &CS,
    witness: &[P::ScalarField],
    trapdoor: &Trapdoor<P>,
) -> Result<Proof<P>>
where
    P: Pairing,
    CS: ConstraintSystem<Field = P::ScalarField> + Sync,
{
    let qap = Qap::compile(cs)?;
    prover_with_qap(&qap, witness, trapdoor)
}

/// Prove with an already compiled QAP.
#[instrument(skip_all, fields(n_vars = qap.num_vars(), n_cons = qap.domain().size()))]
pub fn prover_with_qap<P: Pairing>(
    qap: &Qap<P::ScalarField>,
    witness: &[P::ScalarField],
    trapdoor: &Trapdoor<P>,
) -> Result<Proof<P>> {
    let aggregates = qap.aggregates_at(witness, &trapdoor.tau)?;
    Ok(prover_with_aggregates(
        &aggregates,
        qap.domain().size(),
        trapdoor,
    ))
}

/// Lift aggregates already evaluated at the trapdoor's τ into a proof over `n_cons`
/// constraints.
pub fn prover_with_aggregates<P: Pairing>(
    aggregates: &QapAggregates<P::ScalarField>,
    n_cons: usize,
    trapdoor: &Trapdoor<P>,
) -> Proof<P> {
    if !aggregates.divisible {
        warn!("witness does not satisfy the constraint system, the proof will not verify");
    }

    Proof {
        pi_a: trapdoor.g1.mul(&aggregates.a),
        pi_b: trapdoor.g2.mul(&aggregates.b),
        pi_c: trapdoor.g1.mul(&aggregates.c),
        pi_h: trapdoor.g1.mul(&aggregates.h),
        g2: trapdoor.g2,
        g2_tau: trapdoor.g2_powers(n_cons),
    }
}
