use crate::prelude::*;
use ark_std::{collections::BTreeMap, str::FromStr};

/// The pairing-friendly curves this crate can instantiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// BLS12-381.
    Bls12_381,
    /// BN254 (alt_bn128).
    Bn254,
}

impl CurveKind {
    /// The name used for this curve in a curve description.
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Bls12_381 => "bls12_381",
            CurveKind::Bn254 => "bn254",
        }
    }
}

impl FromStr for CurveKind {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "bls12_381" => Ok(CurveKind::Bls12_381),
            "bn254" | "alt_bn128" => Ok(CurveKind::Bn254),
            _ => Err(AlgebraError::UnsupportedCurveError),
        }
    }
}

/// A curve description: whitespace-separated `key value` lines.
///
/// Only the `type` key is interpreted, it selects the backend. Every other key is kept
/// verbatim and otherwise ignored. Blank lines and lines starting with `#` are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    kind: CurveKind,
    entries: BTreeMap<String, String>,
}

impl CurveParams {
    /// Parse a curve description.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, char::is_whitespace);
            let key = parts.next().ok_or(AlgebraError::ParameterError)?;
            let value = parts.next().map(str::trim).unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
        }

        let kind = entries
            .get("type")
            .ok_or(AlgebraError::ParameterError)?
            .parse::<CurveKind>()?;

        Ok(Self { kind, entries })
    }

    /// Read and parse a curve description from a file.
    #[cfg(feature = "std")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|_| AlgebraError::ParameterError)?;
        let text = String::from_utf8(bytes).map_err(|_| AlgebraError::DeserializationError)?;
        Self::parse(&text)
    }

    /// The selected curve.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Look up a raw entry of the description.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl FromStr for CurveParams {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::{CurveKind, CurveParams};
    use crate::errors::AlgebraError;

    #[test]
    fn parse_bls() {
        let text = "# demo parameters\ntype bls12_381\nr 52435875175126190479447740508185965837690552500527637822603658699938581184513\n\n";
        let params = CurveParams::parse(text).unwrap();
        assert_eq!(params.kind(), CurveKind::Bls12_381);
        assert!(params.get("r").unwrap().starts_with("5243"));
        assert_eq!(params.get("q"), None);
    }

    #[test]
    fn parse_bn_aliases() {
        for name in ["bn254", "BN254", "alt_bn128", "alt-bn128"] {
            let params: CurveParams = format!("type {}", name).parse().unwrap();
            assert_eq!(params.kind(), CurveKind::Bn254);
        }
    }

    #[test]
    fn missing_or_unknown_type() {
        assert_eq!(
            CurveParams::parse("q 8780710799663312522437781984754049815806883199414208211028653399266475630880222957078625179422662221423155858769582317459277713367317481324925129998224791"),
            Err(AlgebraError::ParameterError)
        );
        assert_eq!(
            CurveParams::parse("type a\nq 13"),
            Err(AlgebraError::UnsupportedCurveError)
        );
        assert_eq!(CurveParams::parse(""), Err(AlgebraError::ParameterError));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in [CurveKind::Bls12_381, CurveKind::Bn254] {
            assert_eq!(kind.name().parse::<CurveKind>().unwrap(), kind);
        }
        assert_eq!(
            serde_json::to_string(&CurveKind::Bls12_381).unwrap(),
            "\"bls12_381\""
        );
    }
}
