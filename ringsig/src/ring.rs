//! Ordered sets of public keys.

use crate::{keys::PublicKey, types::*, Error, Signer};
use serde::*;
use std::{convert::TryFrom, ops::Deref};

/// The ordered list of public keys a signature hides its signer among.
///
/// A ring always holds at least two keys. Its order is part of every challenge hashed by both
/// schemes, so a verifier must use the keys in exactly the order the signer used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PublicKey>", into = "Vec<PublicKey>")]
pub struct Ring(Vec<PublicKey>);

impl Ring {
    /// Smallest ring that offers any anonymity.
    pub const MIN_SIZE: usize = 2;

    /// Form a ring from an ordered list of public keys.
    ///
    /// Fails with [`Error::InvalidRingIndex`] on fewer than [`Ring::MIN_SIZE`] keys, and with
    /// [`Error::MalformedGroupElement`] if any key is the identity, which anyone could sign for.
    pub fn new(keys: Vec<PublicKey>) -> Result<Self, Error> {
        if keys.len() < Self::MIN_SIZE {
            return Err(Error::InvalidRingIndex);
        }
        if keys.iter().any(PublicKey::is_identity) {
            return Err(Error::MalformedGroupElement);
        }
        Ok(Self(keys))
    }

    /// Number of keys in the ring.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `key` occurs anywhere in the ring.
    pub fn contains(&self, key: &PublicKey) -> bool {
        self.0.contains(key)
    }

    /// The position of `key` in the ring.
    ///
    /// Fails with [`Error::InvalidRingIndex`] unless the key occurs exactly once.
    pub fn position_of(&self, key: &PublicKey) -> Result<usize, Error> {
        let mut positions = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, member)| *member == key)
            .map(|(i, _)| i);

        match (positions.next(), positions.next()) {
            (Some(i), None) => Ok(i),
            _ => Err(Error::InvalidRingIndex),
        }
    }

    /// Check that `signer` sits at position `index`, and nowhere else.
    pub(crate) fn check_signer_at(&self, signer: &Signer, index: usize) -> Result<(), Error> {
        if self.position_of(signer.public_key())? == index {
            Ok(())
        } else {
            Err(Error::InvalidRingIndex)
        }
    }

    /// Canonical encoding of the ring: each key's uncompressed encoding, in order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|key| key.to_bytes().to_vec()).collect()
    }
}

impl Deref for Ring {
    type Target = [PublicKey];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<PublicKey>> for Ring {
    type Error = Error;

    fn try_from(keys: Vec<PublicKey>) -> Result<Self, Self::Error> {
        Ring::new(keys)
    }
}

impl From<Ring> for Vec<PublicKey> {
    fn from(ring: Ring) -> Self {
        ring.0
    }
}

impl TranscriptInput for Ring {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append(&self.0);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{test::rng, Parameters};

    fn signers(n: usize) -> Vec<Signer> {
        let mut rng = rng();
        let params = Parameters::new();
        (0..n)
            .map(|_| Signer::new(&params, &mut rng).unwrap())
            .collect()
    }

    fn keys(signers: &[Signer]) -> Vec<PublicKey> {
        signers.iter().map(|s| *s.public_key()).collect()
    }

    #[test]
    fn degenerate_rings_are_rejected() {
        let signers = signers(1);
        assert_eq!(Ring::new(Vec::new()), Err(Error::InvalidRingIndex));
        assert_eq!(Ring::new(keys(&signers)), Err(Error::InvalidRingIndex));
    }

    #[test]
    fn identity_key_is_rejected() {
        let signers = signers(2);
        let mut with_identity = keys(&signers);
        with_identity.push(PublicKey::from_element(G1Projective::identity()));
        assert_eq!(Ring::new(with_identity), Err(Error::MalformedGroupElement));
    }

    #[test]
    fn position_requires_exactly_one_occurrence() {
        let signers = signers(3);
        let ring = Ring::new(keys(&signers)).unwrap();
        assert_eq!(ring.position_of(signers[1].public_key()), Ok(1));

        let mut doubled = keys(&signers);
        doubled.push(*signers[1].public_key());
        let doubled = Ring::new(doubled).unwrap();
        assert_eq!(
            doubled.position_of(signers[1].public_key()),
            Err(Error::InvalidRingIndex)
        );
        assert_eq!(doubled.position_of(signers[0].public_key()), Ok(0));

        let outsider = Ring::new(keys(&signers[..2])).unwrap();
        assert!(!outsider.contains(signers[2].public_key()));
        assert_eq!(
            outsider.position_of(signers[2].public_key()),
            Err(Error::InvalidRingIndex)
        );
    }

    #[test]
    fn signer_must_sit_at_claimed_index() {
        let signers = signers(3);
        let ring = Ring::new(keys(&signers)).unwrap();
        assert!(ring.check_signer_at(&signers[2], 2).is_ok());
        assert_eq!(
            ring.check_signer_at(&signers[2], 0),
            Err(Error::InvalidRingIndex)
        );
        assert_eq!(
            ring.check_signer_at(&signers[2], 7),
            Err(Error::InvalidRingIndex)
        );
    }

    #[test]
    fn ring_hashes_as_concatenated_keys() {
        let signers = signers(3);
        let ring = Ring::new(keys(&signers)).unwrap();
        assert_eq!(ring.to_bytes().len(), 3 * PublicKey::ENCODED_LEN);
        assert_eq!(
            Transcript::new().with(&ring).finish(),
            Transcript::new().with_bytes(ring.to_bytes()).finish()
        );
    }

    #[test]
    fn deserializing_a_short_ring_fails() {
        let signers = signers(2);
        let ring = Ring::new(keys(&signers)).unwrap();

        let bytes = bincode::serialize(&ring).unwrap();
        assert_eq!(bincode::deserialize::<Ring>(&bytes).unwrap(), ring);

        let short = bincode::serialize(&keys(&signers[..1])).unwrap();
        assert!(bincode::deserialize::<Ring>(&short).is_err());
    }
}
