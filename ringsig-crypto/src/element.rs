//! Group elements of G1 and G2 and their canonical encodings.
//!
//! Both groups use the uncompressed encoding from the `bls12_381` crate: the big-endian affine
//! coordinates `x ‖ y`, 96 bytes for G1 and 192 bytes for G2. The same bytes are hashed into
//! transcripts and written to the wire. Decoding checks that the point is on the curve and in the
//! prime-order subgroup.

use crate::{Error, G1Affine, G1Projective, G2Affine, G2Projective, Rng, Scalar};
use group::{Group, UncompressedEncoding};

/// An element of one of the prime-order groups used by the ring signature schemes.
pub trait CurveElement: Group<Scalar = Scalar> + Send + Sync {
    /// Length in bytes of the canonical (uncompressed) encoding.
    const ENCODED_LEN: usize;

    /// Fixed-width buffer holding the canonical encoding.
    type Encoding: Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Canonical encoding of this element.
    fn to_encoding(&self) -> Self::Encoding;

    /// Decode a canonical encoding, or `None` if it is not a point of the prime-order subgroup.
    fn from_encoding(bytes: &Self::Encoding) -> Option<Self>;
}

macro_rules! impl_curve_element {
    ($projective:ty, $affine:ty, $len:expr) => {
        impl CurveElement for $projective {
            const ENCODED_LEN: usize = $len;

            type Encoding = <$affine as UncompressedEncoding>::Uncompressed;

            fn to_encoding(&self) -> Self::Encoding {
                UncompressedEncoding::to_uncompressed(&<$affine>::from(self))
            }

            fn from_encoding(bytes: &Self::Encoding) -> Option<Self> {
                Option::<$affine>::from(<$affine as UncompressedEncoding>::from_uncompressed(bytes))
                    .map(<$projective>::from)
            }
        }
    };
}

impl_curve_element!(G1Projective, G1Affine, 96);
impl_curve_element!(G2Projective, G2Affine, 192);

/// Sample a uniformly random element by multiplying `base` with a fresh random scalar.
pub fn random_multiple<G: CurveElement>(base: &G, rng: &mut impl Rng) -> Result<G, Error> {
    Ok(*base * crate::scalar::random(rng)?)
}

/// Canonical fixed-width encoding of a group element.
pub fn to_bytes<G: CurveElement>(element: &G) -> G::Encoding {
    element.to_encoding()
}

/// Decode a group element from its canonical encoding.
///
/// Fails with [`Error::MalformedGroupElement`] when the slice has the wrong length, the point is
/// not on the curve, or it lies outside the prime-order subgroup.
pub fn from_bytes<G: CurveElement>(bytes: &[u8]) -> Result<G, Error> {
    let mut repr = G::Encoding::default();
    if bytes.len() != repr.as_ref().len() {
        return Err(Error::MalformedGroupElement);
    }
    repr.as_mut().copy_from_slice(bytes);
    G::from_encoding(&repr).ok_or(Error::MalformedGroupElement)
}
