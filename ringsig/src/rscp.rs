/*!
The pairing-based ring signature scheme (RSCP).

Ring members hold keys in G1 as in [`brfl`](crate::brfl); the signature adds a single element of
G2. With `P` and `Q` the generators of G1 and G2, the signer at position `s` picks random
commitments `U_i` for the other members, hashes `h_i = H(U_i, m, ring)`, and closes the ring with

```text
U_s = r·P - Σ_{i≠s} (U_i + h_i·pk_i)
V   = (r + h_s·sk)·Q
```

so that `Σ_i (U_i + h_i·pk_i) = (r + h_s·sk)·P`. The verifier checks `e(P, V) = e(Σ, Q)`.
*/

use crate::{
    encoding::{self, Reader},
    sum::{map_commitments, ring_sum},
    types::*,
    Error, Parameters, Rng, Ring, Signer,
};
use group::Group;
use ringsig_crypto::element::CurveElement;
use serde::*;

/// An RSCP ring signature: one commitment per ring member and an element of G2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// One commitment `U_i` per ring member, in ring order.
    #[serde(with = "SerializeElement")]
    commitments: Vec<G1Projective>,
    /// `V = (r + h_s·sk)·Q`, the response checked by the pairing equation.
    #[serde(with = "SerializeElement")]
    v: G2Projective,
}

impl Signature {
    /// The per-member commitments `U_i`, in ring order.
    pub fn commitments(&self) -> &[G1Projective] {
        &self.commitments
    }

    /// The response `V = (r + h_s·sk)·Q`.
    pub fn v(&self) -> &G2Projective {
        &self.v
    }

    /// Length in bytes of the canonical encoding.
    pub fn encoded_len(&self) -> usize {
        encoding::RING_SIZE_LEN
            + self.commitments.len() * G1Projective::ENCODED_LEN
            + G2Projective::ENCODED_LEN
    }

    /// Canonical encoding: ring size, then `U_0..U_{n-1}`, then `V`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        encoding::write_ring_size(&mut buf, self.commitments.len());
        encoding::write_points(&mut buf, &self.commitments);
        encoding::write_points(&mut buf, &[self.v]);
        buf
    }

    /// Decode a signature from its canonical encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(bytes);
        let n = reader.ring_size(|n| {
            encoding::encoded_len(n, G1Projective::ENCODED_LEN, G2Projective::ENCODED_LEN)
        })?;
        let sig = Self {
            commitments: reader.points(n)?,
            v: reader.point()?,
        };
        reader.finish()?;
        Ok(sig)
    }
}

/// `h_i = H(U_i, m, ring)`.
fn member_challenge(u: &G1Projective, msg: &[u8], ring: &Ring) -> Scalar {
    Transcript::new().with(u).with_bytes(msg).with(ring).finish()
}

/// Sign `msg` on behalf of `ring`, at the signer's position in the ring.
///
/// Fails with [`Error::InvalidRingIndex`] unless the signer's public key occurs exactly once in
/// the ring, and with [`Error::RandomnessFailure`] if `rng` fails.
pub fn sign(
    params: &Parameters,
    rng: &mut impl Rng,
    msg: &[u8],
    ring: &Ring,
    signer: &Signer,
) -> Result<Signature, Error> {
    let index = ring.position_of(signer.public_key())?;
    sign_at_index(params, rng, msg, ring, signer, index)
}

/// Sign `msg` on behalf of `ring`, where the caller already knows the signer sits at `index`.
///
/// Fails with [`Error::InvalidRingIndex`] if `index` is out of range or the key there is not the
/// signer's.
#[tracing::instrument(skip_all, fields(ring_size = ring.len(), index = index))]
pub fn sign_at_index(
    params: &Parameters,
    rng: &mut impl Rng,
    msg: &[u8],
    ring: &Ring,
    signer: &Signer,
    index: usize,
) -> Result<Signature, Error> {
    ring.check_signer_at(signer, index)?;
    let p = params.g1();
    let sk = signer.secret_key().as_scalar();

    let mut commitments = vec![G1Projective::identity(); ring.len()];
    for (i, u) in commitments.iter_mut().enumerate() {
        if i != index {
            *u = element::random_multiple(p, rng)?;
        }
    }
    let challenges = map_commitments(&commitments, |u| member_challenge(u, msg, ring));
    let decoys = ring_sum(ring, &commitments, &challenges, Some(index));

    // U_s = r·P - Σ_{i≠s}(U_i + h_i·pk_i)
    let r = scalar::random(rng)?;
    let u_s = p * r - decoys;
    let h_s = member_challenge(&u_s, msg, ring);
    commitments[index] = u_s;

    Ok(Signature {
        commitments,
        v: params.g2() * (r + h_s * sk),
    })
}

/// Verify a signature on `msg` against `ring`, which must list the keys in the order used to
/// sign.
#[tracing::instrument(skip_all, fields(ring_size = ring.len()))]
pub fn verify(params: &Parameters, msg: &[u8], ring: &Ring, sig: &Signature) -> bool {
    if sig.commitments.len() != ring.len() {
        tracing::debug!(
            commitments = sig.commitments.len(),
            "signature does not match the ring size"
        );
        return false;
    }

    let challenges = map_commitments(&sig.commitments, |u| member_challenge(u, msg, ring));
    let sum = ring_sum(ring, &sig.commitments, &challenges, None);

    // e(P, V) = e(Σ, Q)
    let lhs = pairing(&params.g1_affine(), &G2Affine::from(sig.v));
    let rhs = pairing(&G1Affine::from(sum), &params.g2_affine());
    if lhs != rhs {
        tracing::debug!("pairing check failed");
        return false;
    }
    true
}
