//! Utilities for serializing and deserializing ring signature types using Serde.
//!
//! [`SerializeElement`] looks like a "module" to Serde and can be used with the
//! `#[serde(with = "SerializeElement")]` syntax to add serialization/deserialization to
//! bls12-381 types which otherwise do not provide `Serialize` and `Deserialize` implementations.
//!
//! Group elements use the same uncompressed encoding that transcripts hash, and scalars use their
//! canonical 32-byte big-endian encoding, so a serialized value hashes identically once decoded.
//! Decoding rejects points outside the prime-order subgroup and non-canonical scalars.

use crate::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::marker::PhantomData;

/// Most elements a sequence reserves room for before they have actually been read. The length
/// prefix of a sequence comes from untrusted input.
const MAX_PREALLOCATED: usize = 1024;

#[derive(Serialize)]
#[serde(transparent)]
struct SerWrapper<'a, G: SerializeElement>(
    #[serde(serialize_with = "<G as SerializeElement>::serialize")] &'a G,
);

#[derive(Deserialize)]
#[serde(transparent)]
struct DeWrapper<G: SerializeElement>(#[serde(with = "SerializeElement")] G);

/// Serialization/deserialization functionality for external `bls12_381` types.
pub trait SerializeElement: Sized {
    /// Proxy serialization function telling serde how to serialize the implementing type.
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    /// Proxy deserialization function telling serde how to deserialize the implementing type.
    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

macro_rules! impl_serialize_point {
    ($affine:ty, $projective:ty) => {
        impl SerializeElement for $affine {
            fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serde_big_array::BigArray::serialize(&this.to_uncompressed(), serializer)
            }

            fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bytes = serde_big_array::BigArray::deserialize(deserializer)?;
                Option::<$affine>::from(<$affine>::from_uncompressed(&bytes))
                    .ok_or_else(|| de::Error::custom(crate::Error::MalformedGroupElement))
            }
        }

        impl SerializeElement for $projective {
            fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                <$affine as SerializeElement>::serialize(&this.into(), serializer)
            }

            fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                <$affine as SerializeElement>::deserialize(deserializer).map(Into::into)
            }
        }
    };
}

impl_serialize_point!(G1Affine, G1Projective);
impl_serialize_point!(G2Affine, G2Projective);

impl SerializeElement for Scalar {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::scalar::to_bytes(this).serialize(serializer)
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        crate::scalar::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

impl<G: SerializeElement> SerializeElement for Vec<G> {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(this.len()))?;
        for g in this {
            seq.serialize_element(&SerWrapper(g))?;
        }
        seq.end()
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementVisitor<G> {
            _phantom: PhantomData<G>,
        }

        impl<'de, G> Visitor<'de> for ElementVisitor<G>
        where
            G: SerializeElement,
        {
            type Value = Vec<G>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a sequence of group elements or scalars")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
                let mut elems = Vec::with_capacity(capacity);
                while let Some(elem) = seq.next_element::<DeWrapper<G>>()? {
                    elems.push(elem.0);
                }
                Ok(elems)
            }
        }

        deserializer.deserialize_seq(ElementVisitor {
            _phantom: PhantomData,
        })
    }
}
