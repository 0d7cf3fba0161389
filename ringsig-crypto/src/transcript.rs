//! Fiat-Shamir transcripts which hash an ordered sequence of segments to a scalar.
//!
//! A transcript accepts five kinds of segment: raw bytes, a single group element, a list of group
//! elements, a single scalar and a list of scalars. Each segment is written with its canonical
//! fixed-width encoding (see [`element`](crate::element) and [`scalar`](crate::scalar)) and the
//! segments are concatenated in the order they were appended, with no separators or length
//! prefixes. Domain separation between protocol steps therefore comes entirely from the order and
//! number of segments, which each protocol fixes per step.
//!
//! The concatenation is hashed with SHA-256 and the digest, read as a big-endian integer, is
//! reduced mod q. Points enter as their uncompressed affine coordinates and scalars as 32
//! big-endian bytes, so a transcript built by any implementation using those encodings hashes to
//! the same challenge.
//!
//! ```
//! # use ringsig_crypto::{Transcript, G1Projective, Scalar};
//! # use group::Group;
//! let challenge = Transcript::new()
//!     .with_bytes(b"message")
//!     .with(&G1Projective::generator())
//!     .with(&Scalar::one())
//!     .finish();
//! # let _ = challenge;
//! ```

use crate::{element::CurveElement, G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use sha2::{Digest, Sha256};

/// A trait implemented by types which can append their public components to a [`Transcript`].
pub trait TranscriptInput {
    /// Append the canonical encoding of this value to the transcript.
    fn append_to(&self, transcript: &mut Transcript);
}

impl<'a, T: TranscriptInput + ?Sized> TranscriptInput for &'a T {
    fn append_to(&self, transcript: &mut Transcript) {
        (**self).append_to(transcript);
    }
}

impl TranscriptInput for Scalar {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_scalar(self);
    }
}

impl TranscriptInput for G1Projective {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_point(self);
    }
}

impl TranscriptInput for G2Projective {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_point(self);
    }
}

impl TranscriptInput for G1Affine {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_bytes(self.to_uncompressed());
    }
}

impl TranscriptInput for G2Affine {
    fn append_to(&self, transcript: &mut Transcript) {
        transcript.append_bytes(self.to_uncompressed());
    }
}

impl<T: TranscriptInput> TranscriptInput for [T] {
    fn append_to(&self, transcript: &mut Transcript) {
        for item in self {
            item.append_to(transcript);
        }
    }
}

impl<T: TranscriptInput> TranscriptInput for Vec<T> {
    fn append_to(&self, transcript: &mut Transcript) {
        self.as_slice().append_to(transcript);
    }
}

/// Holds the running hash state of a Fiat-Shamir transcript.
///
/// Cloning a transcript forks it: the clone continues from the segments appended so far, which
/// lets a shared prefix be hashed once and completed many times.
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Transcript {
    hasher: Sha256,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Start a new, empty transcript.
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Append raw bytes.
    pub fn append_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        self.hasher.update(bytes);
    }

    /// Append a single group element.
    pub fn append_point<G: CurveElement>(&mut self, point: &G) {
        self.hasher.update(crate::element::to_bytes(point));
    }

    /// Append a list of group elements, in order.
    pub fn append_points<G: CurveElement>(&mut self, points: &[G]) {
        for point in points {
            self.append_point(point);
        }
    }

    /// Append a single scalar.
    pub fn append_scalar(&mut self, scalar: &Scalar) {
        self.hasher.update(crate::scalar::to_bytes(scalar));
    }

    /// Append a list of scalars, in order.
    pub fn append_scalars(&mut self, scalars: &[Scalar]) {
        for scalar in scalars {
            self.append_scalar(scalar);
        }
    }

    /// Append any value implementing [`TranscriptInput`].
    pub fn append<T: TranscriptInput + ?Sized>(&mut self, value: &T) {
        value.append_to(self);
    }

    /// A conveniently chainable variant of [`Transcript::append`].
    pub fn with<T: TranscriptInput + ?Sized>(mut self, value: &T) -> Self {
        self.append(value);
        self
    }

    /// A conveniently chainable variant of [`Transcript::append_bytes`].
    pub fn with_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.append_bytes(bytes);
        self
    }

    /// Consume the transcript and hash it to a scalar.
    pub fn finish(self) -> Scalar {
        let mut digest = [0; 32];
        digest.copy_from_slice(self.hasher.finalize().as_slice());
        crate::scalar::from_digest(&digest)
    }
}
