use crate::errors::{Result, SnarkError};
use quill_algebra::prelude::*;

/// Upper bound on the constraint count a proof may announce.
pub const MAX_CONSTRAINTS: usize = 1 << 24;

/// A proof of a polynomial-evaluation claim.
///
/// Besides the four commitments it carries the G2 base and the powers g2^{τ^i},
/// i = 0..=m, so that it verifies on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<P: Pairing> {
    /// g1^{A(τ)}.
    pub pi_a: P::G1,
    /// g2^{B(τ)}.
    pub pi_b: P::G2,
    /// g1^{C(τ)}.
    pub pi_c: P::G1,
    /// g1^{H(τ)}.
    pub pi_h: P::G1,
    /// The G2 base.
    pub g2: P::G2,
    /// g2^{τ^i} for i = 0..=m.
    pub g2_tau: Vec<P::G2>,
}

impl<P: Pairing> Proof<P> {
    /// The number of constraints m of the proven system.
    pub fn num_constraints(&self) -> usize {
        self.g2_tau.len().saturating_sub(1)
    }

    /// Encode the proof.
    ///
    /// Layout: `pi_a`, `pi_b`, `pi_c`, `pi_h`, `g2`, each a compressed point behind a
    /// 4-byte big-endian length, then m as a bare 4-byte big-endian integer, then the
    /// m + 1 elements of `g2_tau` framed the same way as the points.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.g2_tau.is_empty() {
            return Err(SnarkError::FuncParamsError);
        }
        let m = u32::try_from(self.num_constraints()).map_err(|_| SnarkError::FuncParamsError)?;

        let mut bytes = Vec::new();
        write_element(&mut bytes, &self.pi_a.to_compressed_bytes())?;
        write_element(&mut bytes, &self.pi_b.to_compressed_bytes())?;
        write_element(&mut bytes, &self.pi_c.to_compressed_bytes())?;
        write_element(&mut bytes, &self.pi_h.to_compressed_bytes())?;
        write_element(&mut bytes, &self.g2.to_compressed_bytes())?;
        bytes.extend_from_slice(&m.to_be_bytes());
        for point in self.g2_tau.iter() {
            write_element(&mut bytes, &point.to_compressed_bytes())?;
        }
        Ok(bytes)
    }

    /// Decode a proof.
    ///
    /// Fails with `DeserializationError` on short reads, invalid points, an oversized m
    /// or trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);
        let pi_a = reader.group::<P::G1>()?;
        let pi_b = reader.group::<P::G2>()?;
        let pi_c = reader.group::<P::G1>()?;
        let pi_h = reader.group::<P::G1>()?;
        let g2 = reader.group::<P::G2>()?;

        let m = reader.u32()? as usize;
        // every element needs at least its 4-byte length
        if m >= MAX_CONSTRAINTS || (m + 1) * 4 > reader.remaining() {
            return Err(SnarkError::DeserializationError);
        }
        let mut g2_tau = Vec::with_capacity(m + 1);
        for _ in 0..=m {
            g2_tau.push(reader.group::<P::G2>()?);
        }

        if reader.remaining() != 0 {
            return Err(SnarkError::DeserializationError);
        }
        Ok(Self {
            pi_a,
            pi_b,
            pi_c,
            pi_h,
            g2,
            g2_tau,
        })
    }

    /// Write the encoded proof to `path`, replacing any existing file atomically.
    #[cfg(feature = "std")]
    pub fn write_to_file(&self, path: &std::path::Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        quill_algebra::utils::save_to_file(&bytes, path)?;
        Ok(())
    }

    /// Read and decode a proof from `path`.
    #[cfg(feature = "std")]
    pub fn read_from_file(path: &std::path::Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

fn write_element(out: &mut Vec<u8>, element: &[u8]) -> Result<()> {
    let len = u32::try_from(element.len()).map_err(|_| SnarkError::FuncParamsError)?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(element);
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn remaining(&self) -> usize {
        self.bytes.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.bytes.len() {
            return Err(SnarkError::DeserializationError);
        }
        let (head, tail) = self.bytes.split_at(n);
        self.bytes = tail;
        Ok(head)
    }

    fn u32(&mut self) -> Result<u32> {
        Ok(u8_be_slice_to_u32(self.take(4)?))
    }

    fn group<G: Group>(&mut self) -> Result<G> {
        let len = self.u32()? as usize;
        if len != G::COMPRESSED_LEN {
            return Err(SnarkError::DeserializationError);
        }
        G::from_compressed_bytes(self.take(len)?).map_err(|_| SnarkError::DeserializationError)
    }
}

#[cfg(test)]
mod test {
    use crate::errors::SnarkError;
    use crate::proof::Proof;
    use quill_algebra::{
        bls12_381::BLSPairingEngine, bn254::BN254PairingEngine, prelude::*,
    };

    fn random_proof<P: Pairing>(m: usize) -> Proof<P> {
        let mut prng = test_rng();
        Proof {
            pi_a: P::G1::random(&mut prng),
            pi_b: P::G2::random(&mut prng),
            pi_c: P::G1::random(&mut prng),
            pi_h: P::G1::random(&mut prng),
            g2: P::G2::random(&mut prng),
            g2_tau: (0..=m).map(|_| P::G2::random(&mut prng)).collect(),
        }
    }

    fn expected_len<P: Pairing>(m: usize) -> usize {
        4 * (5 + m + 1)
            + 3 * P::G1::COMPRESSED_LEN
            + (2 + m + 1) * P::G2::COMPRESSED_LEN
            + 4
    }

    fn layout<P: Pairing>() {
        let proof = random_proof::<P>(3);
        let bytes = proof.to_bytes().unwrap();
        assert_eq!(bytes.len(), expected_len::<P>(3));

        assert_eq!(
            u8_be_slice_to_u32(&bytes[..4]) as usize,
            P::G1::COMPRESSED_LEN
        );
        assert_eq!(&bytes[4..4 + P::G1::COMPRESSED_LEN], &proof.pi_a.to_compressed_bytes()[..]);

        let m_offset = 4 * 5 + 3 * P::G1::COMPRESSED_LEN + 2 * P::G2::COMPRESSED_LEN;
        assert_eq!(u8_be_slice_to_u32(&bytes[m_offset..m_offset + 4]), 3);

        let decoded = Proof::<P>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, proof);
        assert_eq!(decoded.num_constraints(), 3);
        assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn encoding_layout() {
        layout::<BLSPairingEngine>();
        layout::<BN254PairingEngine>();
    }

    #[test]
    fn truncated_and_trailing_bytes() {
        let bytes = random_proof::<BLSPairingEngine>(2).to_bytes().unwrap();
        for cut in [0, 3, 4, 51, bytes.len() - 1] {
            assert_eq!(
                Proof::<BLSPairingEngine>::from_bytes(&bytes[..cut]),
                Err(SnarkError::DeserializationError)
            );
        }
        let mut longer = bytes.clone();
        longer.push(0);
        assert_eq!(
            Proof::<BLSPairingEngine>::from_bytes(&longer),
            Err(SnarkError::DeserializationError)
        );
    }

    #[test]
    fn oversized_count_is_rejected() {
        let bytes = random_proof::<BN254PairingEngine>(1).to_bytes().unwrap();
        let m_offset = 4 * 5 + 3 * 32 + 2 * 64;
        let mut forged = bytes.clone();
        forged[m_offset..m_offset + 4].copy_from_slice(&u32::MAX.to_be_bytes());
        assert_eq!(
            Proof::<BN254PairingEngine>::from_bytes(&forged),
            Err(SnarkError::DeserializationError)
        );
        forged[m_offset..m_offset + 4].copy_from_slice(&2u32.to_be_bytes());
        assert_eq!(
            Proof::<BN254PairingEngine>::from_bytes(&forged),
            Err(SnarkError::DeserializationError)
        );
    }

    #[test]
    fn wrong_element_length_is_rejected() {
        let mut bytes = random_proof::<BLSPairingEngine>(1).to_bytes().unwrap();
        bytes[3] = 47;
        assert_eq!(
            Proof::<BLSPairingEngine>::from_bytes(&bytes),
            Err(SnarkError::DeserializationError)
        );
    }

    #[test]
    fn empty_powers_cannot_be_encoded() {
        let mut proof = random_proof::<BLSPairingEngine>(0);
        proof.g2_tau.clear();
        assert_eq!(proof.to_bytes(), Err(SnarkError::FuncParamsError));
    }
}
