use crate::circuit::ConstraintSystem;
use crate::errors::{Result, SnarkError};
use crate::qap::{EvaluationDomain, Qap, QapAggregates};
use quill_algebra::prelude::*;
use tracing::{debug, info, instrument};

/// The secret randomness of the trusted setup: τ and the two group bases.
///
/// Whoever holds it can forge proofs. The demo flow keeps it and hands it to the prover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trapdoor<P: Pairing> {
    /// The secret evaluation point.
    pub tau: P::ScalarField,
    /// The G1 base.
    pub g1: P::G1,
    /// The G2 base.
    pub g2: P::G2,
}

impl<P: Pairing> Trapdoor<P> {
    /// Sample τ, g1 and g2 uniformly, drawing τ again while it hits a point of `domain`.
    pub fn sample<R: CryptoRng + RngCore>(
        prng: &mut R,
        domain: &EvaluationDomain<P::ScalarField>,
    ) -> Self {
        let tau = loop {
            let tau = P::ScalarField::random(prng);
            if !domain.contains(&tau) {
                break tau;
            }
            debug!("sampled tau on a constraint point, sampling again");
        };
        Self {
            tau,
            g1: P::G1::random(prng),
            g2: P::G2::random(prng),
        }
    }

    /// τ⁰, τ¹, …, τ^degree.
    pub fn tau_powers(&self, degree: usize) -> Vec<P::ScalarField> {
        let mut powers = Vec::with_capacity(degree + 1);
        let mut power = P::ScalarField::one();
        for _ in 0..=degree {
            powers.push(power);
            power.mul_assign(&self.tau);
        }
        powers
    }

    /// g2^{τ⁰}, …, g2^{τ^degree}.
    pub fn g2_powers(&self, degree: usize) -> Vec<P::G2> {
        self.tau_powers(degree)
            .iter()
            .map(|power| self.g2.mul(power))
            .collect()
    }

    /// Powers of τ in the scalar field and in both source groups.
    pub fn powers_of_tau(&self, degree: usize) -> PowersOfTau<P> {
        let tau_powers = self.tau_powers(degree);
        let g1_powers = tau_powers.iter().map(|p| self.g1.mul(p)).collect();
        let g2_powers = tau_powers.iter().map(|p| self.g2.mul(p)).collect();
        PowersOfTau {
            tau_powers,
            g1_powers,
            g2_powers,
        }
    }
}

/// τ^i, g1^{τ^i} and g2^{τ^i} for i = 0..=degree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PowersOfTau<P: Pairing> {
    /// The powers of τ.
    pub tau_powers: Vec<P::ScalarField>,
    /// The powers of τ in G1.
    pub g1_powers: Vec<P::G1>,
    /// The powers of τ in G2.
    pub g2_powers: Vec<P::G2>,
}

/// A fresh powers-of-tau ceremony of the given degree with its own trapdoor.
pub fn powers_of_tau<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    degree: usize,
) -> (Trapdoor<P>, PowersOfTau<P>) {
    let trapdoor = Trapdoor::<P>::sample(prng, &EvaluationDomain::new(0));
    let powers = trapdoor.powers_of_tau(degree);
    (trapdoor, powers)
}

/// The per-variable query elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProverParams<P: Pairing> {
    /// g1^{Aⱼ(τ)} per variable j.
    pub a_query: Vec<P::G1>,
    /// g2^{Bⱼ(τ)} per variable j.
    pub b_query: Vec<P::G2>,
    /// g1^{Cⱼ(τ)} per variable j.
    pub c_query: Vec<P::G1>,
}

/// What the pairing check needs: the G2 base and its τ powers up to m.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifierParams<P: Pairing> {
    /// The G2 base.
    pub g2: P::G2,
    /// g2^{τ^i} for i = 0..=m.
    pub g2_tau: Vec<P::G2>,
}

impl<P: Pairing> VerifierParams<P> {
    /// The number of constraints m these parameters serve.
    pub fn num_constraints(&self) -> usize {
        self.g2_tau.len().saturating_sub(1)
    }

    /// g2^{Z(τ)}, rebuilt without τ.
    pub fn vanishing_in_g2(&self) -> Result<P::G2> {
        vanishing_in_g2::<P>(&self.g2_tau)
    }
}

/// g2^{Z(τ)} = Σᵢ zᵢ·g2^{τ^i}, zᵢ being the coefficients of the vanishing polynomial
/// of the points 1..=m, with m + 1 = `g2_tau.len()`.
pub fn vanishing_in_g2<P: Pairing>(g2_tau: &[P::G2]) -> Result<P::G2> {
    let m = g2_tau
        .len()
        .checked_sub(1)
        .ok_or(SnarkError::FuncParamsError)?;
    let domain = EvaluationDomain::<P::ScalarField>::new(m);
    let coefs: Vec<&P::ScalarField> = domain.vanishing_polynomial().coefs.iter().collect();
    let points: Vec<&P::G2> = g2_tau.iter().collect();
    Ok(P::G2::multi_exp(&coefs, &points)?)
}

/// The structured reference string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Crs<P: Pairing> {
    /// Query elements for the prover.
    pub prover_params: ProverParams<P>,
    /// Elements for the verifier.
    pub verifier_params: VerifierParams<P>,
}

impl<P: Pairing> Crs<P> {
    /// Derive the CRS of a compiled QAP from a trapdoor.
    pub fn from_qap(qap: &Qap<P::ScalarField>, trapdoor: &Trapdoor<P>) -> Self {
        let evals = qap.evaluate_at(&trapdoor.tau);
        let prover_params = ProverParams {
            a_query: evals.a.iter().map(|v| trapdoor.g1.mul(v)).collect(),
            b_query: evals.b.iter().map(|v| trapdoor.g2.mul(v)).collect(),
            c_query: evals.c.iter().map(|v| trapdoor.g1.mul(v)).collect(),
        };
        let verifier_params = VerifierParams {
            g2: trapdoor.g2,
            g2_tau: trapdoor.g2_powers(qap.domain().size()),
        };
        Self {
            prover_params,
            verifier_params,
        }
    }
}

/// Everything the setup produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupOutput<P: Pairing> {
    /// The toxic waste.
    pub trapdoor: Trapdoor<P>,
    /// The reference string.
    pub crs: Crs<P>,
    /// The self-check values, present when a witness was supplied.
    pub aggregates: Option<QapAggregates<P::ScalarField>>,
}

/// Run the trusted setup for a constraint system.
///
/// With a witness, the setup also checks that A(X)·B(X) − C(X) is divisible by Z(X) and
/// fails with `QapDivisibilityError` otherwise, returning no key material.
pub fn setup<P, R, CS>(
    prng: &mut R,
    cs: &CS,
    witness: Option<&[P::ScalarField]>,
) -> Result<SetupOutput<P>>
where
    P: Pairing,
    R: CryptoRng + RngCore,
    CS: ConstraintSystem<Field = P::ScalarField> + Sync,
{
    let qap = Qap::compile(cs)?;
    let trapdoor = Trapdoor::<P>::sample(prng, qap.domain());
    setup_from_qap(&qap, trapdoor, witness)
}

/// Run the setup with a given trapdoor.
#[instrument(skip_all, fields(n_vars = qap.num_vars(), n_cons = qap.domain().size()))]
pub fn setup_from_qap<P: Pairing>(
    qap: &Qap<P::ScalarField>,
    trapdoor: Trapdoor<P>,
    witness: Option<&[P::ScalarField]>,
) -> Result<SetupOutput<P>> {
    let aggregates = match witness {
        Some(witness) => {
            let aggregates = qap.aggregates_at(witness, &trapdoor.tau)?;
            if !aggregates.divisible {
                return Err(SnarkError::QapDivisibilityError);
            }
            Some(aggregates)
        }
        None => {
            if qap.domain().contains(&trapdoor.tau) {
                return Err(SnarkError::TauCollision);
            }
            None
        }
    };

    let crs = Crs::from_qap(qap, &trapdoor);
    info!("generated reference string for {} variables", qap.num_vars());
    Ok(SetupOutput {
        trapdoor,
        crs,
        aggregates,
    })
}

#[cfg(test)]
mod test {
    use crate::circuit::build_polynomial_circuit;
    use crate::errors::SnarkError;
    use crate::qap::{EvaluationDomain, Qap};
    use crate::setup::{powers_of_tau, setup, setup_from_qap, Trapdoor};
    use quill_algebra::{
        bls12_381::{BLSPairingEngine, BLSScalar},
        bn254::BN254PairingEngine,
        prelude::*,
    };

    type F = BLSScalar;

    fn linear_claim(y: u32) -> (crate::circuit::R1CS<F>, Vec<F>) {
        let c = |v: u32| F::from(v);
        build_polynomial_circuit(1, &[c(3), c(2)], &c(4), &c(y)).unwrap()
    }

    #[test]
    fn queries_and_powers() {
        let mut prng = test_rng();
        let (cs, w) = linear_claim(11);
        let out = setup::<BLSPairingEngine, _, _>(&mut prng, &cs, Some(w.as_slice())).unwrap();
        let tau = out.trapdoor.tau;

        let qap = Qap::compile(&cs).unwrap();
        let evals = qap.evaluate_at(&tau);
        let pp = &out.crs.prover_params;
        assert_eq!(pp.a_query.len(), 4);
        for j in 0..4 {
            assert_eq!(pp.a_query[j], out.trapdoor.g1.mul(&evals.a[j]));
            assert_eq!(pp.b_query[j], out.trapdoor.g2.mul(&evals.b[j]));
            assert_eq!(pp.c_query[j], out.trapdoor.g1.mul(&evals.c[j]));
        }

        let vp = &out.crs.verifier_params;
        assert_eq!(vp.num_constraints(), 3);
        assert_eq!(vp.g2_tau[0], vp.g2);
        assert_eq!(vp.g2_tau[3], vp.g2.mul(&tau.mul(&tau).mul(&tau)));

        let z = EvaluationDomain::<F>::new(3).eval_vanishing(&tau);
        assert_eq!(vp.vanishing_in_g2().unwrap(), vp.g2.mul(&z));

        let agg = out.aggregates.unwrap();
        assert!(agg.divisible);
        assert_eq!(agg.z, z);
    }

    #[test]
    fn self_check_rejects_false_claim() {
        let mut prng = test_rng();
        let (cs, w) = linear_claim(12);
        assert_eq!(
            setup::<BLSPairingEngine, _, _>(&mut prng, &cs, Some(w.as_slice())),
            Err(SnarkError::QapDivisibilityError)
        );
        // without a witness there is nothing to check
        assert!(setup::<BLSPairingEngine, _, _>(&mut prng, &cs, None).is_ok());
    }

    #[test]
    fn colliding_trapdoor_is_refused() {
        let mut prng = test_rng();
        let (cs, w) = linear_claim(11);
        let qap = Qap::compile(&cs).unwrap();
        let trapdoor = Trapdoor::<BLSPairingEngine> {
            tau: F::from(2u32),
            g1: Group::random(&mut prng),
            g2: Group::random(&mut prng),
        };
        assert_eq!(
            setup_from_qap(&qap, trapdoor.clone(), Some(w.as_slice())),
            Err(SnarkError::TauCollision)
        );
        assert_eq!(
            setup_from_qap(&qap, trapdoor, None),
            Err(SnarkError::TauCollision)
        );
    }

    #[test]
    fn standalone_powers_of_tau() {
        let mut prng = test_rng();
        let (trapdoor, pot) = powers_of_tau::<BN254PairingEngine, _>(&mut prng, 8);
        assert_eq!(pot.tau_powers.len(), 9);
        assert_eq!(pot.g1_powers.len(), 9);
        assert_eq!(pot.g2_powers.len(), 9);
        assert!(pot.tau_powers[0].is_one());
        assert_eq!(pot.tau_powers[1], trapdoor.tau);
        assert_eq!(pot.g1_powers[0], trapdoor.g1);
        assert_eq!(pot.g2_powers[5], trapdoor.g2.mul(&pot.tau_powers[5]));
        assert_eq!(
            pot.tau_powers[8],
            trapdoor.tau.pow(&[8])
        );
    }

    #[test]
    fn crs_bincode_round_trip() {
        let mut prng = test_rng();
        let (cs, w) = linear_claim(11);
        let out = setup::<BLSPairingEngine, _, _>(&mut prng, &cs, Some(w.as_slice())).unwrap();
        let bytes = bincode::serialize(&out.crs).unwrap();
        let crs: crate::setup::Crs<BLSPairingEngine> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(crs, out.crs);

        let json = serde_json::to_string(&out.trapdoor).unwrap();
        let trapdoor: Trapdoor<BLSPairingEngine> = serde_json::from_str(&json).unwrap();
        assert_eq!(trapdoor, out.trapdoor);
    }
}
