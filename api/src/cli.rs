use crate::errors::{CliError, Result};
use quill_algebra::prelude::*;
use quill_snark::circuit::PolynomialClaim;
use std::path::{Path, PathBuf};
use structopt::{clap::AppSettings, StructOpt};

/// Command line of the `quill` tool.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "quill",
    about = "Pairing-based succinct proofs of polynomial evaluations.",
    rename_all = "kebab-case",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
pub struct Opt {
    /// Disable ANSI colors (a non-empty NO_COLOR does the same)
    #[structopt(long, global = true)]
    pub no_color: bool,

    #[structopt(subcommand)]
    pub action: Actions,
}

/// One subcommand per stage of the pipeline.
#[derive(StructOpt, Debug, Clone, PartialEq, Eq)]
#[structopt(rename_all = "kebab-case")]
pub enum Actions {
    /// Builds the R1CS of a claim and prints its wires
    BuildCircuit(ClaimArgs),

    /// Prints the interpolated QAP polynomials of every variable
    Interpolate(ClaimArgs),

    /// Runs a powers-of-tau ceremony and prints the powers in Zr, G1 and G2
    Pot {
        /// Curve description file
        #[structopt(parse(from_os_str))]
        params: PathBuf,
        /// Highest power of tau
        #[structopt(default_value = "8")]
        degree: usize,
    },

    /// Runs the trusted setup with the divisibility self-check
    Keygen {
        #[structopt(flatten)]
        claim: ClaimArgs,
        /// Writes the reference string here (bincode)
        #[structopt(long, parse(from_os_str))]
        out: Option<PathBuf>,
    },

    /// Proves a claim and writes the proof
    Prove {
        #[structopt(flatten)]
        claim: ClaimArgs,
        /// Proof output file
        #[structopt(long, parse(from_os_str), default_value = "proof_demo.bin")]
        proof: PathBuf,
    },

    /// Verifies a proof and prints ACCEPT or REJECT
    Verify {
        /// Curve description file
        #[structopt(parse(from_os_str))]
        params: PathBuf,
        /// Proof file
        #[structopt(parse(from_os_str), default_value = "proof_demo.bin")]
        proof: PathBuf,
    },
}

impl Actions {
    /// The curve description every subcommand starts from.
    pub fn params(&self) -> &Path {
        use Actions::*;
        match self {
            BuildCircuit(claim) | Interpolate(claim) => &claim.params,
            Keygen { claim, .. } | Prove { claim, .. } => &claim.params,
            Pot { params, .. } | Verify { params, .. } => params,
        }
    }
}

/// The claim "y = a0 + a1·x + … + ad·x^d", numbers in decimal.
#[derive(StructOpt, Debug, Clone, PartialEq, Eq)]
pub struct ClaimArgs {
    /// Curve description file (`key value` lines, `type` picks the curve)
    #[structopt(parse(from_os_str))]
    pub params: PathBuf,
    /// Degree d of the polynomial
    pub degree: usize,
    /// Evaluation point x
    pub x: String,
    /// Claimed value y
    pub y: String,
    /// Coefficients a0 .. ad
    #[structopt(required = true)]
    pub coefs: Vec<String>,
}

impl ClaimArgs {
    /// Parse the numbers into field elements.
    pub fn to_claim<F: Scalar>(&self) -> Result<PolynomialClaim<F>> {
        let x = parse_scalar("x", &self.x)?;
        let y = parse_scalar("y", &self.y)?;
        let coefs = self
            .coefs
            .iter()
            .enumerate()
            .map(|(i, a)| parse_scalar(&format!("a{}", i), a))
            .collect::<Result<Vec<F>>>()?;
        Ok(PolynomialClaim::new(self.degree, coefs, x, y)?)
    }
}

fn parse_scalar<F: Scalar>(name: &str, value: &str) -> Result<F> {
    value.parse::<F>().map_err(|_| CliError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}
