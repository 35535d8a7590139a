use quill::{run, Actions, CliError, ClaimArgs, Console};
use quill_algebra::prelude::*;
use quill_snark::{errors::SnarkError, verifier::Verdict};
use rand_chacha::ChaChaRng;
use std::path::{Path, PathBuf};

struct Workdir(PathBuf);

impl Workdir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("quill-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        Workdir(dir)
    }

    fn params(&self, curve: &str) -> PathBuf {
        let path = self.0.join(format!("{}.param", curve));
        std::fs::write(&path, format!("# demo\ntype {}\n", curve)).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn claim(params: &Path, degree: usize, x: u32, y: u32, coefs: &[u32]) -> ClaimArgs {
    ClaimArgs {
        params: params.to_path_buf(),
        degree,
        x: x.to_string(),
        y: y.to_string(),
        coefs: coefs.iter().map(|a| a.to_string()).collect(),
    }
}

fn exec(action: &Actions) -> (Result<Option<Verdict>, CliError>, String) {
    let mut prng = ChaChaRng::from_seed([9u8; 32]);
    let mut console = Console::new(Vec::new(), false);
    let result = run(action, &mut console, &mut prng);
    let text = String::from_utf8(console.into_inner()).unwrap();
    (result, text)
}

fn prove_then_verify(curve: &str) {
    let dir = Workdir::new(curve);
    let params = dir.params(curve);
    let proof = dir.path("proof.bin");

    let (result, text) = exec(&Actions::Prove {
        claim: claim(&params, 1, 4, 11, &[3, 2]),
        proof: proof.clone(),
    });
    assert!(result.unwrap().is_none());
    assert!(text.contains("divisible          : yes"));
    assert!(proof.exists());

    let (result, text) = exec(&Actions::Verify {
        params: params.clone(),
        proof: proof.clone(),
    });
    assert_eq!(result.unwrap(), Some(Verdict::Accept));
    assert!(text.contains("ACCEPT"));

    let (result, _) = exec(&Actions::Prove {
        claim: claim(&params, 1, 4, 12, &[3, 2]),
        proof: proof.clone(),
    });
    assert!(result.is_ok());
    let (result, text) = exec(&Actions::Verify {
        params,
        proof,
    });
    assert_eq!(result.unwrap(), Some(Verdict::Reject));
    assert!(text.contains("REJECT"));
}

#[test]
fn prove_and_verify_on_both_curves() {
    prove_then_verify("bls12_381");
    prove_then_verify("bn254");
}

#[test]
fn keygen_writes_reference_string() {
    let dir = Workdir::new("keygen");
    let params = dir.params("bls12_381");
    let out = dir.path("crs.bin");

    let (result, text) = exec(&Actions::Keygen {
        claim: claim(&params, 2, 2, 13, &[1, 0, 3]),
        out: Some(out.clone()),
    });
    assert!(result.is_ok());
    assert!(text.contains("H*Z = A*B - C"));
    assert!(!std::fs::read(&out).unwrap().is_empty());

    let (result, _) = exec(&Actions::Keygen {
        claim: claim(&params, 2, 2, 14, &[1, 0, 3]),
        out: None,
    });
    assert!(matches!(
        result,
        Err(CliError::Snark(SnarkError::QapDivisibilityError))
    ));
}

#[test]
fn circuit_and_interpolation_reports() {
    let dir = Workdir::new("report");
    let params = dir.params("bn254");

    let (result, text) = exec(&Actions::BuildCircuit(claim(&params, 1, 4, 11, &[3, 2])));
    assert!(result.is_ok());
    assert!(text.contains("constraints (m)    : 3"));
    assert!(text.contains("  [3] = 11\n"));
    assert!(text.contains("satisfied          : yes"));

    let (result, text) = exec(&Actions::Interpolate(claim(&params, 0, 5, 7, &[7])));
    assert!(result.is_ok());
    assert!(text.contains("-- variable 1 --"));
    assert!(text.contains("Vanishing polynomial"));

    let (result, text) = exec(&Actions::Pot {
        params,
        degree: 3,
    });
    assert!(result.is_ok());
    assert!(text.contains("g2^(tau^i)\n"));
    assert!(text.contains("  [0] = 1\n"));
}

#[test]
fn bad_inputs_are_errors() {
    let dir = Workdir::new("errors");
    let params = dir.params("secp256k1");
    let (result, _) = exec(&Actions::Verify {
        params,
        proof: dir.path("proof.bin"),
    });
    assert!(matches!(
        result,
        Err(CliError::Algebra(AlgebraError::UnsupportedCurveError))
    ));

    let params = dir.params("bls12_381");
    let (result, _) = exec(&Actions::Verify {
        params: params.clone(),
        proof: dir.path("missing.bin"),
    });
    assert!(matches!(result, Err(CliError::Snark(SnarkError::Io(_)))));

    let garbage = dir.path("garbage.bin");
    std::fs::write(&garbage, [0u8; 10]).unwrap();
    let (result, _) = exec(&Actions::Verify {
        params: params.clone(),
        proof: garbage,
    });
    assert!(matches!(
        result,
        Err(CliError::Snark(SnarkError::DeserializationError))
    ));

    let (result, _) = exec(&Actions::BuildCircuit(ClaimArgs {
        x: "four".into(),
        ..claim(&params, 1, 4, 11, &[3, 2])
    }));
    assert!(matches!(result, Err(CliError::InvalidNumber { .. })));
}
