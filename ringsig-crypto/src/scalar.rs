//! Arithmetic in the scalar field Zq of BLS12-381, where q is the order of G1, G2 and GT.
//!
//! Addition, subtraction and multiplication are the operator impls on [`Scalar`], which always
//! produce reduced results. The operations here cover what can fail: inversion of zero,
//! sampling from a broken entropy source, and decoding of non-canonical bytes.

use crate::{Error, Rng, Scalar};
use std::convert::TryFrom;

/// Length in bytes of the canonical scalar encoding.
pub const SCALAR_LEN: usize = 32;

/// Compute the multiplicative inverse of `s` mod q.
pub fn invert(s: &Scalar) -> Result<Scalar, Error> {
    Option::<Scalar>::from(s.invert()).ok_or(Error::NonInvertibleScalar)
}

/// Sample a scalar uniformly at random from [0, q).
///
/// Draws 64 bytes from the generator and reduces them mod q, so the bias is negligible. Only the
/// fallible [`try_fill_bytes`](rand::RngCore::try_fill_bytes) entry point is used, so a failing
/// source surfaces as [`Error::RandomnessFailure`] instead of a fixed value.
pub fn random(rng: &mut impl Rng) -> Result<Scalar, Error> {
    let mut wide = [0; 64];
    rng.try_fill_bytes(&mut wide)
        .map_err(|_| Error::RandomnessFailure)?;
    Ok(Scalar::from_bytes_wide(&wide))
}

/// Sample a scalar uniformly at random from [1, q).
pub fn random_nonzero(rng: &mut impl Rng) -> Result<Scalar, Error> {
    loop {
        let s = random(&mut *rng)?;
        if s != Scalar::zero() {
            return Ok(s);
        }
    }
}

/// Interpret a 256-bit digest as a big-endian integer and reduce it mod q.
pub fn from_digest(digest: &[u8; 32]) -> Scalar {
    // `from_bytes_wide` takes a little-endian 512-bit integer.
    let mut wide = [0; 64];
    for (dst, src) in wide.iter_mut().zip(digest.iter().rev()) {
        *dst = *src;
    }
    Scalar::from_bytes_wide(&wide)
}

/// Canonical fixed-width encoding of a scalar: 32 bytes, big-endian.
pub fn to_bytes(s: &Scalar) -> [u8; SCALAR_LEN] {
    let mut bytes = s.to_bytes();
    bytes.reverse();
    bytes
}

/// Decode a canonical big-endian scalar. Fails on the wrong length or on an integer that is not
/// below q.
pub fn from_bytes(bytes: &[u8]) -> Result<Scalar, Error> {
    let mut bytes = <[u8; SCALAR_LEN]>::try_from(bytes).map_err(|_| Error::MalformedScalar)?;
    bytes.reverse();
    Option::<Scalar>::from(Scalar::from_bytes(&bytes)).ok_or(Error::MalformedScalar)
}
