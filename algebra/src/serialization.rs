use crate::prelude::*;

/// Helper trait to serialize algebraic objects through their canonical byte encoding.
pub trait QuillFromToBytes: Sized {
    /// Convert to bytes.
    fn quill_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn quill_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serde glue for any `QuillFromToBytes` type: base64 strings for human-readable formats,
/// raw bytes otherwise.
pub mod obj_serde {
    use crate::prelude::*;
    use crate::serialization::QuillFromToBytes;
    use serde::de::{SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};

    /// Visitor collecting the encoded bytes of an object.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> ark_std::fmt::Result {
            formatter.write_str("a valid QuillFromToBytes object")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = vec![];
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }

    /// Serialize an object.
    pub fn serialize<S, T>(obj: &T, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: QuillFromToBytes,
    {
        let bytes = obj.quill_to_bytes();
        if serializer.is_human_readable() {
            serializer.serialize_str(&b64enc(&bytes))
        } else {
            serializer.serialize_bytes(&bytes)
        }
    }

    /// Deserialize an object.
    pub fn deserialize<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: QuillFromToBytes,
    {
        let bytes = if deserializer.is_human_readable() {
            deserializer.deserialize_str(BytesVisitor)?
        } else {
            deserializer.deserialize_bytes(BytesVisitor)?
        };
        T::quill_from_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

/// Implement serde traits for a type that implements `QuillFromToBytes`.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                $crate::serialization::obj_serde::serialize(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::serialization::obj_serde::deserialize(deserializer)
            }
        }
    };
}
