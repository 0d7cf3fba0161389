//! Signer key pairs.
//!
//! A [`Signer`] holds a private scalar `sk` and the public key `pk = sk·P`. The private key never
//! leaves this crate: it is not serializable and its `Debug` output is redacted.

use crate::{types::*, Error, Parameters, Rng};
use serde::*;
use std::fmt;

/// A signer's private key: a nonzero scalar.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct SecretKey(Scalar);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

impl SecretKey {
    pub(crate) fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

/// A ring member's public key, an element of G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "SerializeElement")] G1Projective);

impl PublicKey {
    /// Length in bytes of the canonical encoding.
    pub const ENCODED_LEN: usize = 96;

    /// Wrap a group element as a public key.
    pub fn from_element(element: G1Projective) -> Self {
        Self(element)
    }

    /// The group element underlying this key.
    pub fn to_element(self) -> G1Projective {
        self.0
    }

    /// Canonical (uncompressed) encoding of the key.
    pub fn to_bytes(&self) -> [u8; 96] {
        G1Affine::from(self.0).to_uncompressed()
    }

    /// Decode a key from its canonical encoding, checking subgroup membership.
    ///
    /// The identity is rejected with [`Error::MalformedGroupElement`]: its discrete log is zero,
    /// so it cannot stand for any signer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let key = Self(element::from_bytes(bytes)?);
        if key.is_identity() {
            return Err(Error::MalformedGroupElement);
        }
        Ok(key)
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }
}

impl TranscriptInput for PublicKey {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_point(&self.0);
    }
}

/// A member of a ring who is able to sign on its behalf.
#[derive(Debug, Clone, Copy)]
pub struct Signer {
    sk: SecretKey,
    pk: PublicKey,
}

impl Signer {
    /// Generate a new key pair.
    ///
    /// The private key is sampled uniformly from the nonzero scalars; a zero key would make the
    /// public key the identity.
    pub fn new(params: &Parameters, rng: &mut impl Rng) -> Result<Self, Error> {
        let sk = scalar::random_nonzero(rng)?;
        Ok(Self {
            sk: SecretKey(sk),
            pk: PublicKey(params.g1() * sk),
        })
    }

    /// Get the public key of this signer.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.sk
    }
}
