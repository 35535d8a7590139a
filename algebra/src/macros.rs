//! Wrapper generators shared by the curve backends.
//!
//! Every supported curve exposes the same four wrapped types (scalar, G1, G2, target
//! group) over its arkworks implementation. The macros below expand to those wrappers
//! so that each backend module only names its arkworks types and encoding lengths.

/// Wrap an arkworks prime field as a `Scalar`.
macro_rules! scalar_wrapper {
    ($(#[$meta:meta])* $name:ident, $fr:ty, $len:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $fr);

        impl ark_std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                <num_bigint::BigUint as ark_std::fmt::Debug>::fmt(&(*self).into(), f)
            }
        }

        impl ark_std::fmt::Display for $name {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                <num_bigint::BigUint as ark_std::fmt::Display>::fmt(&(*self).into(), f)
            }
        }

        impl ark_std::str::FromStr for $name {
            type Err = AlgebraError;

            /// Parse a decimal integer, optionally negative, reduced modulo the field order.
            fn from_str(string: &str) -> core::result::Result<Self, AlgebraError> {
                use num_traits::Num;

                let (negative, digits) = match string.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, string),
                };
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(AlgebraError::DeserializationError);
                }
                let value = num_bigint::BigUint::from_str_radix(digits, 10)
                    .map_err(|_| AlgebraError::DeserializationError)?;
                let res = Self::from(&value);
                Ok(if negative { -res } else { res })
            }
        }

        impl From<$name> for num_bigint::BigUint {
            #[inline]
            fn from(value: $name) -> Self {
                use ark_ff::PrimeField;
                value.0.into_bigint().into()
            }
        }

        impl<'a> From<&'a num_bigint::BigUint> for $name {
            #[inline]
            fn from(src: &num_bigint::BigUint) -> Self {
                Self(<$fr>::from(src.clone()))
            }
        }

        impl One for $name {
            #[inline]
            fn one() -> Self {
                Self(<$fr as One>::one())
            }
        }

        impl Zero for $name {
            #[inline]
            fn zero() -> Self {
                Self(<$fr as Zero>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }
        }

        impl Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl Sum<$name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = &'a $name>>(iter: I) -> Self {
                iter.fold(Self::zero(), |acc, x| acc + x)
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> Mul<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> MulAssign<&'a $name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(value: u32) -> Self {
                Self::from(value as u64)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$fr>::from(value))
            }
        }

        impl Scalar for $name {
            #[inline]
            fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
                Self(<$fr as UniformRand>::rand(rng))
            }

            #[inline]
            fn get_field_size_biguint() -> num_bigint::BigUint {
                use ark_ff::PrimeField;
                <$fr as PrimeField>::MODULUS.into()
            }

            #[inline]
            fn bytes_len() -> usize {
                $len
            }

            #[inline]
            fn to_bytes(&self) -> Vec<u8> {
                use ark_ff::{BigInteger, PrimeField};
                self.0.into_bigint().to_bytes_le()
            }

            #[inline]
            fn from_bytes(bytes: &[u8]) -> Result<Self> {
                use ark_ff::PrimeField;
                if bytes.len() > Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                Ok(Self(<$fr as PrimeField>::from_le_bytes_mod_order(bytes)))
            }

            #[inline]
            fn inv(&self) -> Result<Self> {
                use ark_ff::Field;
                self.0
                    .inverse()
                    .map(Self)
                    .ok_or(AlgebraError::GroupInversionError)
            }

            #[inline]
            fn square(&self) -> Self {
                use ark_ff::Field;
                Self(self.0.square())
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                use ark_ff::Field;
                Self(self.0.pow(exponent))
            }
        }

        impl QuillFromToBytes for $name {
            fn quill_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }

            fn quill_from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != Self::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                Self::from_bytes(bytes)
            }
        }

        serialize_deserialize!($name);
    };
}

/// Wrap an arkworks short Weierstrass projective group as a `Group`.
macro_rules! curve_group_wrapper {
    (
        $(#[$meta:meta])*
        $name:ident,
        $projective:ty,
        $affine:ty,
        $scalar:ident,
        $compressed:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Default, Clone, PartialEq, Eq)]
        pub struct $name(pub(crate) $projective);

        impl ark_std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                use ark_ec::CurveGroup;
                <$affine as ark_std::fmt::Display>::fmt(&self.0.into_affine(), f)
            }
        }

        impl Group for $name {
            type ScalarType = $scalar;
            const COMPRESSED_LEN: usize = $compressed;

            #[inline]
            fn double(&self) -> Self {
                use ark_ec::Group as ArkGroup;
                Self(self.0.double())
            }

            #[inline]
            fn get_identity() -> Self {
                Self(<$projective as Zero>::zero())
            }

            #[inline]
            fn get_base() -> Self {
                use ark_ec::Group as ArkGroup;
                Self(<$projective as ArkGroup>::generator())
            }

            #[inline]
            fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
                Self(<$projective as UniformRand>::rand(prng))
            }

            #[inline]
            fn to_compressed_bytes(&self) -> Vec<u8> {
                use ark_serialize::{CanonicalSerialize, Compress};
                let affine = <$affine>::from(self.0);
                let mut buf = Vec::new();
                // safe unwrap
                affine.serialize_with_mode(&mut buf, Compress::Yes).unwrap();
                buf
            }

            #[inline]
            fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
                use ark_ec::AffineRepr;
                use ark_serialize::{CanonicalDeserialize, Compress, Validate};
                if bytes.len() != Self::COMPRESSED_LEN {
                    return Err(AlgebraError::DeserializationError);
                }
                let affine = <$affine>::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
                    .map_err(|_| AlgebraError::DeserializationError)?;
                let point = Self(affine.into_group());
                // the infinity flag masks the coordinate bytes
                if point.to_compressed_bytes() != bytes {
                    return Err(AlgebraError::DeserializationError);
                }
                Ok(point)
            }

            #[inline]
            fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Result<Self> {
                use ark_ec::{CurveGroup, VariableBaseMSM};

                if scalars.len() != points.len() {
                    return Err(AlgebraError::ParameterError);
                }
                if scalars.is_empty() {
                    return Ok(Self::get_identity());
                }
                let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
                let points_raw = <$projective as CurveGroup>::normalize_batch(
                    &points.iter().map(|r| r.0).collect::<Vec<$projective>>(),
                );
                <$projective as VariableBaseMSM>::msm(&points_raw, &scalars_raw)
                    .map(Self)
                    .map_err(|_| AlgebraError::ParameterError)
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> Mul<&'a $scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &$scalar) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $name) {
                self.0 += rhs.0
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $name) {
                self.0 -= rhs.0
            }
        }

        impl<'a> MulAssign<&'a $scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &'a $scalar) {
                self.0 *= rhs.0
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl QuillFromToBytes for $name {
            fn quill_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }

            fn quill_from_bytes(bytes: &[u8]) -> Result<Self> {
                Self::from_compressed_bytes(bytes)
            }
        }

        serialize_deserialize!($name);
    };
}

/// Wrap the degree-12 extension field that holds pairing outputs as a multiplicative
/// `Group`, written additively.
macro_rules! target_group_wrapper {
    ($(#[$meta:meta])* $name:ident, $fq12:ty, $scalar:ident, $engine:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
        pub struct $name(pub(crate) $fq12);

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                let mut v = self.0;
                v.conjugate_in_place();
                Self(v)
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &'a $name) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &'a $name) -> Self::Output {
                let mut rhs_inverse = rhs.0;
                rhs_inverse.conjugate_in_place();
                Self(self.0 * rhs_inverse)
            }
        }

        impl<'a> Mul<&'a $scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &'a $scalar) -> Self::Output {
                use ark_ff::{Field, PrimeField};
                Self(self.0.pow(rhs.0.into_bigint()))
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $name) {
                self.0 *= rhs.0
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $name) {
                *self = *self - rhs
            }
        }

        impl<'a> MulAssign<&'a $scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &'a $scalar) {
                *self = *self * rhs
            }
        }

        impl Group for $name {
            type ScalarType = $scalar;
            const COMPRESSED_LEN: usize = $len;

            #[inline]
            fn double(&self) -> Self {
                use ark_ff::Field;
                Self(self.0.square())
            }

            #[inline]
            fn get_identity() -> Self {
                Self(<$fq12 as One>::one())
            }

            #[inline]
            fn get_base() -> Self {
                $engine::pairing(&Group::get_base(), &Group::get_base())
            }

            #[inline]
            fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
                Self::get_base().mul(&$scalar::random(prng))
            }

            #[inline]
            fn to_compressed_bytes(&self) -> Vec<u8> {
                use ark_serialize::{CanonicalSerialize, Compress};
                let mut buf = Vec::new();
                // safe unwrap
                self.0.serialize_with_mode(&mut buf, Compress::Yes).unwrap();
                buf
            }

            #[inline]
            fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
                use ark_serialize::{CanonicalDeserialize, Compress, Validate};
                if bytes.len() != Self::COMPRESSED_LEN {
                    return Err(AlgebraError::DeserializationError);
                }
                let res = Self(
                    <$fq12>::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
                        .map_err(|_| AlgebraError::DeserializationError)?,
                );
                if res.to_compressed_bytes() != bytes {
                    return Err(AlgebraError::DeserializationError);
                }
                Ok(res)
            }
        }

        impl QuillFromToBytes for $name {
            fn quill_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }

            fn quill_from_bytes(bytes: &[u8]) -> Result<Self> {
                Self::from_compressed_bytes(bytes)
            }
        }

        serialize_deserialize!($name);
    };
}

/// Implement `Pairing` for a backend from its arkworks engine.
macro_rules! pairing_engine {
    (
        $(#[$meta:meta])*
        $name:ident,
        $ark_engine:ty,
        $curve_name:expr,
        $scalar:ident,
        $g1:ident,
        $g2:ident,
        $gt:ident
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Pairing for $name {
            const NAME: &'static str = $curve_name;
            type ScalarField = $scalar;
            type G1 = $g1;
            type G2 = $g2;
            type Gt = $gt;

            #[inline]
            fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
                use ark_ec::pairing::Pairing as ArkPairing;
                $gt(<$ark_engine as ArkPairing>::pairing(a.0, b.0).0)
            }

            #[inline]
            fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
                use ark_ec::pairing::Pairing as ArkPairing;
                $gt(<$ark_engine as ArkPairing>::multi_pairing(
                    a.iter().map(|x| x.0),
                    b.iter().map(|x| x.0),
                )
                .0)
            }
        }
    };
}
