/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bn254_groups_test {
    use crate::{
        bn254::{BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1, BN254G2},
        prelude::*,
        traits::group_tests::{
            test_bilinearity, test_canonical_encoding, test_group_serialization, test_multi_exp,
            test_scalar_from_str, test_scalar_operations, test_scalar_serialization,
        },
    };

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
    }

    #[test]
    fn scalar_parse() {
        test_scalar_from_str::<BN254Scalar>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let mut expected = [0u8; 32];
        expected[..3].copy_from_slice(&[115, 135, 2]);
        assert_eq!(small_value_bytes, expected);
        assert_eq!(BN254Scalar::from_bytes(&small_value_bytes).unwrap(), small_value);
        assert!(BN254Scalar::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn field_size() {
        assert_eq!(
            BN254Scalar::get_field_size_biguint().to_string(),
            "21888242871839275222246405745257275088548364400416034343698204186575808495617"
        );
    }

    #[test]
    fn bilinear_properties() {
        test_bilinearity::<BN254PairingEngine>();
    }

    #[test]
    fn encoding_lengths() {
        assert_eq!(BN254G1::get_base().to_compressed_bytes().len(), 32);
        assert_eq!(BN254G2::get_base().to_compressed_bytes().len(), 64);
        assert_eq!(BN254Gt::get_base().to_compressed_bytes().len(), 384);
    }

    #[test]
    fn test_serialization_of_points() {
        test_group_serialization::<BN254G1>();
        test_group_serialization::<BN254G2>();
        test_group_serialization::<BN254Gt>();
    }

    #[test]
    fn non_canonical_encodings_are_rejected() {
        test_canonical_encoding::<BN254G1>();
        test_canonical_encoding::<BN254G2>();
        test_canonical_encoding::<BN254Gt>();
    }

    #[test]
    fn msm() {
        test_multi_exp::<BN254G1>();
        test_multi_exp::<BN254G2>();
        test_multi_exp::<BN254Gt>();
    }
}
