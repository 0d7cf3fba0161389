//! System parameters shared by every signing and verification call.
//!
//! The parameters are the generator `P` of G1 and the generator `Q` of G2; the group order q is
//! fixed by the [`Scalar`](crate::Scalar) type. A [`Parameters`] value is built once, never
//! mutated, and passed by shared reference, so it can be used from any number of threads.

use crate::{Error, G1Affine, G1Projective, G2Affine, G2Projective, SerializeElement};
use group::Group;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// The generators used by the ring signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedParameters")]
pub struct Parameters {
    #[serde(with = "SerializeElement")]
    p: G1Projective,
    #[serde(with = "SerializeElement")]
    q: G2Projective,
}

#[derive(Deserialize)]
struct UncheckedParameters {
    #[serde(with = "SerializeElement")]
    p: G1Projective,
    #[serde(with = "SerializeElement")]
    q: G2Projective,
}

impl TryFrom<UncheckedParameters> for Parameters {
    type Error = Error;

    fn try_from(unchecked: UncheckedParameters) -> Result<Self, Self::Error> {
        Parameters::from_generators(unchecked.p, unchecked.q)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}

impl Parameters {
    /// The standard generators of BLS12-381.
    pub fn new() -> Self {
        Self {
            p: G1Projective::generator(),
            q: G2Projective::generator(),
        }
    }

    /// Use custom generators. Neither may be the identity element.
    pub fn from_generators(p: G1Projective, q: G2Projective) -> Result<Self, Error> {
        if bool::from(p.is_identity()) || bool::from(q.is_identity()) {
            return Err(Error::MalformedGroupElement);
        }
        Ok(Self { p, q })
    }

    /// The generator `P` of G1.
    pub fn g1(&self) -> &G1Projective {
        &self.p
    }

    /// The generator `Q` of G2.
    pub fn g2(&self) -> &G2Projective {
        &self.q
    }

    /// The generator `P` of G1 in affine form, as taken by the pairing.
    pub fn g1_affine(&self) -> G1Affine {
        self.p.into()
    }

    /// The generator `Q` of G2 in affine form, as taken by the pairing.
    pub fn g2_affine(&self) -> G2Affine {
        self.q.into()
    }
}
