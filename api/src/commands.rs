use crate::cli::{Actions, ClaimArgs};
use crate::console::Console;
use crate::errors::Result;
use quill_algebra::{
    bls12_381::BLSPairingEngine, bn254::BN254PairingEngine, params::CurveKind,
    params::CurveParams, prelude::*,
};
use quill_snark::{
    circuit::ConstraintSystem,
    proof::Proof,
    prover::prover_with_aggregates,
    qap::Qap,
    setup::{powers_of_tau, setup_from_qap, Trapdoor},
    verifier::{verifier, Verdict},
};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run one subcommand on the curve its description selects.
///
/// Returns the verdict for `verify` and `None` for every other subcommand.
pub fn run<R, W>(
    action: &Actions,
    console: &mut Console<W>,
    prng: &mut R,
) -> Result<Option<Verdict>>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let params = CurveParams::from_file(action.params())?;
    info!(curve = params.kind().name(), "loaded curve description");
    match params.kind() {
        CurveKind::Bls12_381 => run_on::<BLSPairingEngine, R, W>(action, console, prng),
        CurveKind::Bn254 => run_on::<BN254PairingEngine, R, W>(action, console, prng),
    }
}

/// Run one subcommand on the curve `P`.
pub fn run_on<P, R, W>(
    action: &Actions,
    console: &mut Console<W>,
    prng: &mut R,
) -> Result<Option<Verdict>>
where
    P: Pairing,
    R: CryptoRng + RngCore,
    W: Write,
{
    use Actions::*;
    match action {
        BuildCircuit(claim) => build_circuit::<P, W>(claim, console)?,
        Interpolate(claim) => interpolate::<P, W>(claim, console)?,
        Pot { degree, .. } => pot::<P, R, W>(*degree, console, prng)?,
        Keygen { claim, out } => keygen::<P, R, W>(claim, out.as_deref(), console, prng)?,
        Prove { claim, proof } => prove::<P, R, W>(claim, proof, console, prng)?,
        Verify { proof, .. } => return verify::<P, W>(proof, console).map(Some),
    }
    Ok(None)
}

fn scalar<F: Scalar>(value: &F) -> String {
    value.into_biguint().to_string()
}

fn point<G: Group>(value: &G) -> String {
    b64enc(&value.to_compressed_bytes())
}

fn scalars<F: Scalar>(values: &[F]) -> Vec<String> {
    values.iter().map(scalar).collect()
}

fn points<G: Group>(values: &[G]) -> Vec<String> {
    values.iter().map(point).collect()
}

fn build_circuit<P: Pairing, W: Write>(
    claim: &ClaimArgs,
    console: &mut Console<W>,
) -> Result<()> {
    let claim = claim.to_claim::<P::ScalarField>()?;
    let (cs, witness) = claim.build()?;

    console.banner("Build circuit")?;
    console.kv("curve", P::NAME)?;
    console.kv("degree (d)", claim.degree)?;
    console.kv("variables (n)", cs.num_vars())?;
    console.kv("constraints (m)", cs.size())?;
    console.list("Wires", &scalars(&witness))?;
    let unsatisfied = cs.unsatisfied_rows(&witness);
    if unsatisfied.is_empty() {
        console.kv("satisfied", "yes")?;
    } else {
        console.kv("unsatisfied rows", format!("{:?}", unsatisfied))?;
    }
    Ok(())
}

fn interpolate<P: Pairing, W: Write>(
    claim: &ClaimArgs,
    console: &mut Console<W>,
) -> Result<()> {
    let claim = claim.to_claim::<P::ScalarField>()?;
    let (cs, _) = claim.build()?;
    let qap = Qap::compile(&cs)?;

    console.banner("QAP interpolation")?;
    console.kv("variables (n)", qap.num_vars())?;
    console.kv("constraints (m)", qap.domain().size())?;
    for j in 0..qap.num_vars() {
        if let Some((a, b, c)) = qap.column_polynomials(j) {
            console.sub(&format!("variable {}", j))?;
            console.list("A", &scalars(a.get_coefs_ref()))?;
            console.list("B", &scalars(b.get_coefs_ref()))?;
            console.list("C", &scalars(c.get_coefs_ref()))?;
        }
    }
    console.sub("Vanishing polynomial")?;
    console.list(
        "Z",
        &scalars(qap.domain().vanishing_polynomial().get_coefs_ref()),
    )?;
    Ok(())
}

fn pot<P, R, W>(degree: usize, console: &mut Console<W>, prng: &mut R) -> Result<()>
where
    P: Pairing,
    R: CryptoRng + RngCore,
    W: Write,
{
    let (trapdoor, powers) = powers_of_tau::<P, R>(prng, degree);

    console.banner("Powers of tau")?;
    console.kv("curve", P::NAME)?;
    console.kv("degree", degree)?;
    console.kv("tau", scalar(&trapdoor.tau))?;
    console.list("tau^i", &scalars(&powers.tau_powers))?;
    console.list("g1^(tau^i)", &points(&powers.g1_powers))?;
    console.list("g2^(tau^i)", &points(&powers.g2_powers))?;
    Ok(())
}

fn keygen<P, R, W>(
    claim: &ClaimArgs,
    out: Option<&Path>,
    console: &mut Console<W>,
    prng: &mut R,
) -> Result<()>
where
    P: Pairing,
    R: CryptoRng + RngCore,
    W: Write,
{
    let claim = claim.to_claim::<P::ScalarField>()?;
    let (cs, witness) = claim.build()?;
    let qap = Qap::compile(&cs)?;
    let trapdoor = Trapdoor::<P>::sample(prng, qap.domain());

    console.banner("Key generation")?;
    console.kv("constraints (m)", qap.domain().size())?;
    console.kv("variables (n)", qap.num_vars())?;

    let output = setup_from_qap(&qap, trapdoor, Some(witness.as_slice()))?;
    console.sub("Trapdoor")?;
    console.kv("tau", scalar(&output.trapdoor.tau))?;
    console.kv("g1", point(&output.trapdoor.g1))?;
    console.kv("g2", point(&output.trapdoor.g2))?;

    if let Some(aggregates) = output.aggregates.as_ref() {
        console.sub("QAP divisibility")?;
        console.kv("A(tau)", scalar(&aggregates.a))?;
        console.kv("B(tau)", scalar(&aggregates.b))?;
        console.kv("C(tau)", scalar(&aggregates.c))?;
        console.kv("Z(tau)", scalar(&aggregates.z))?;
        console.kv("H(tau)", scalar(&aggregates.h))?;
        console.kv("H*Z = A*B - C", "ok")?;
    }

    let params = &output.crs.prover_params;
    console.sub("Reference string")?;
    console.list("g1^A_j(tau)", &points(&params.a_query))?;
    console.list("g2^B_j(tau)", &points(&params.b_query))?;
    console.list("g1^C_j(tau)", &points(&params.c_query))?;
    console.list("g2^(tau^i)", &points(&output.crs.verifier_params.g2_tau))?;

    if let Some(path) = out {
        let bytes = bincode::serialize(&output.crs)?;
        save_to_file(&bytes, path)?;
        console.kv("reference string", path.display())?;
    }
    Ok(())
}

fn prove<P, R, W>(
    claim: &ClaimArgs,
    path: &Path,
    console: &mut Console<W>,
    prng: &mut R,
) -> Result<()>
where
    P: Pairing,
    R: CryptoRng + RngCore,
    W: Write,
{
    let claim = claim.to_claim::<P::ScalarField>()?;
    let (cs, witness) = claim.build()?;
    let qap = Qap::compile(&cs)?;
    let trapdoor = Trapdoor::<P>::sample(prng, qap.domain());

    console.banner("Prover")?;
    console.kv("constraints (m)", qap.domain().size())?;
    console.kv("variables (n)", qap.num_vars())?;
    console.kv("tau", scalar(&trapdoor.tau))?;

    let aggregates = qap.aggregates_at(&witness, &trapdoor.tau)?;
    console.sub("Aggregates")?;
    console.kv("A(tau)", scalar(&aggregates.a))?;
    console.kv("B(tau)", scalar(&aggregates.b))?;
    console.kv("C(tau)", scalar(&aggregates.c))?;
    console.kv("Z(tau)", scalar(&aggregates.z))?;
    console.kv("H(tau)", scalar(&aggregates.h))?;
    console.kv("divisible", if aggregates.divisible { "yes" } else { "no" })?;

    let proof = prover_with_aggregates(&aggregates, qap.domain().size(), &trapdoor);
    console.sub("Proof elements")?;
    console.kv("piA (G1)", point(&proof.pi_a))?;
    console.kv("piB (G2)", point(&proof.pi_b))?;
    console.kv("piC (G1)", point(&proof.pi_c))?;
    console.kv("piH (G1)", point(&proof.pi_h))?;

    proof.write_to_file(path)?;
    console.kv("proof file", path.display())?;
    Ok(())
}

fn verify<P: Pairing, W: Write>(path: &Path, console: &mut Console<W>) -> Result<Verdict> {
    let proof = Proof::<P>::read_from_file(path)?;

    console.banner("Verifier")?;
    console.kv("proof file", path.display())?;
    console.sub("Proof elements")?;
    console.kv("piA (G1)", point(&proof.pi_a))?;
    console.kv("piB (G2)", point(&proof.pi_b))?;
    console.kv("piC (G1)", point(&proof.pi_c))?;
    console.kv("piH (G1)", point(&proof.pi_h))?;
    console.kv("g2  (G2)", point(&proof.g2))?;
    console.kv("m", proof.num_constraints())?;

    let verdict = verifier(&proof)?;
    console.sub("Pairing check")?;
    console.kv("result", verdict)?;
    Ok(verdict)
}
