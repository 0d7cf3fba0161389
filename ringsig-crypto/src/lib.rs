//! This crate includes the algebraic building blocks for ring signatures instantiated over the
//! pairing-friendly curve BLS12-381:
//! - Arithmetic in the scalar field Zq, with fallible inversion and sampling.
//! - Canonical fixed-width encodings for scalars and elements of G1 and G2.
//! - A Fiat-Shamir transcript which hashes an ordered sequence of typed segments to a scalar.
//! - System [`Parameters`] (the generators of G1 and G2) shared by every signing and
//!   verification call.

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(broken_intra_doc_links)]

pub mod element;
pub mod parameters;
pub mod scalar;
pub mod transcript;

mod serde;

pub use crate::{
    parameters::Parameters,
    serde::SerializeElement,
    transcript::{Transcript, TranscriptInput},
};
pub use bls12_381::{pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};

use thiserror::*;

/// Error types that may arise from ring signature operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Caused by a ring with fewer than two members, or a signer whose public key does not occur
    /// exactly once in the ring (or not at the claimed position).
    #[error("the ring must hold at least two keys, including the signer's key exactly once")]
    InvalidRingIndex,
    /// Caused by inverting a scalar congruent to zero, or by a zero Fiat-Shamir challenge.
    #[error("tried to invert a scalar congruent to zero mod q")]
    NonInvertibleScalar,
    /// Caused by a failure of the secure randomness source.
    #[error("the secure randomness source failed")]
    RandomnessFailure,
    /// Caused by decoding bytes which are not a point in the prime-order subgroup.
    #[error("encoding is not a valid element of the prime-order subgroup")]
    MalformedGroupElement,
    /// Caused by decoding bytes which are not the canonical encoding of a scalar.
    #[error("encoding is not a canonical scalar mod q")]
    MalformedScalar,
    /// Caused by decoding a signature whose length is inconsistent with its declared ring size.
    #[error("expected a signature encoding of {expected} bytes, got {got}")]
    MalformedSignature {
        /// The length implied by the declared ring size.
        expected: usize,
        /// The actual length of the encoding.
        got: usize,
    },
}

/// A trait synonym for a cryptographically secure random number generator. This trait is
/// blanket-implemented for all valid types and will never need to be implemented by-hand.
pub trait Rng: rand::CryptoRng + rand::RngCore {}
impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}
