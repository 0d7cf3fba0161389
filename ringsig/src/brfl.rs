/*!
The pairing-free ring signature scheme (BRFL), over G1 of BLS12-381.

Notation: `P` is the generator of G1, `H` hashes a [`Transcript`] to a scalar, the ring is
`pk_0, ..., pk_{n-1}` and the signer sits at position `s` with private key `sk` and public key
`pk = sk·P`.

To sign, the signer picks a random commitment `U_i` for every other member, computes
`H_i = H(m, ring, U_i)` and solves the closure equation

```text
U_s = r'·pk - Σ_{i≠s} (U_i + H_i·pk_i)
```

so that `Σ_i (U_i + H_i·pk_i) = (r' + H_s)·pk`. The scalar `V = r·sk / (r' + H_s)` then maps
that sum to the point `r·sk·pk`, which the verifier cannot compute on its own. A Schnorr-style
proof (`R_M`, `C`, `T`, `Pi`) binds `C` to `r·sk·pk` and to the point `r·P`.

Every `U_i` is a uniformly random element of G1, so the commitments do not reveal `s`.
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

/// How many times the signer resamples `r'` when `r' + H_s` is zero before giving up.
///
/// Each attempt fails with probability about 1/q.
const MAX_CLOSURE_ATTEMPTS: usize = 8;

/// Bytes of the fixed-width fields `R_M`, `V`, `C`, `T` and `Pi`.
const FIXED_LEN: usize = 96 + 32 + 32 + 96 + 32;

/// A BRFL ring signature. Its size grows linearly with the size of the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// `R_M = r_M·P`, the blinding commitment of the proof.
    #[serde(with = "SerializeElement")]
    r_m: G1Projective,
    /// One commitment `U_i` per ring member, in ring order.
    #[serde(with = "SerializeElement")]
    commitments: Vec<G1Projective>,
    /// `V = r·sk / (r' + H_s)`.
    #[serde(with = "SerializeElement")]
    v: Scalar,
    /// The challenge `C`, which verification recomputes.
    #[serde(with = "SerializeElement")]
    c: Scalar,
    /// `T = t·P`.
    #[serde(with = "SerializeElement")]
    t: G1Projective,
    /// The proof response `Pi = t - e·S`.
    #[serde(with = "SerializeElement")]
    pi: Scalar,
}

impl Signature {
    /// The per-member commitments `U_i`, in ring order.
    pub fn commitments(&self) -> &[G1Projective] {
        &self.commitments
    }

    /// The challenge `C`.
    pub fn challenge(&self) -> Scalar {
        self.c
    }

    /// Length in bytes of the canonical encoding.
    pub fn encoded_len(&self) -> usize {
        encoding::RING_SIZE_LEN + self.commitments.len() * G1Projective::ENCODED_LEN + FIXED_LEN
    }

    /// Canonical encoding: ring size, then `R_M`, `U_0..U_{n-1}`, `V`, `C`, `T`, `Pi`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        encoding::write_ring_size(&mut buf, self.commitments.len());
        encoding::write_points(&mut buf, &[self.r_m]);
        encoding::write_points(&mut buf, &self.commitments);
        buf.extend_from_slice(&scalar::to_bytes(&self.v));
        buf.extend_from_slice(&scalar::to_bytes(&self.c));
        encoding::write_points(&mut buf, &[self.t]);
        buf.extend_from_slice(&scalar::to_bytes(&self.pi));
        buf
    }

    /// Decode a signature from its canonical encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(bytes);
        let n = reader.ring_size(|n| {
            encoding::encoded_len(n, G1Projective::ENCODED_LEN, FIXED_LEN)
        })?;
        let sig = Self {
            r_m: reader.point()?,
            commitments: reader.points(n)?,
            v: reader.scalar()?,
            c: reader.scalar()?,
            t: reader.point()?,
            pi: reader.scalar()?,
        };
        reader.finish()?;
        Ok(sig)
    }
}

/// The shared prefix `(m, ring)` of every member challenge `H_i = H(m, ring, U_i)`.
fn member_transcript(msg: &[u8], ring: &Ring) -> Transcript {
    Transcript::new().with_bytes(msg).with(ring)
}

/// The proof challenge `e = H(ring, m, T, C)`.
fn proof_challenge(msg: &[u8], ring: &Ring, t: &G1Projective, c: &Scalar) -> Scalar {
    Transcript::new().with(ring).with_bytes(msg).with(t).with(c).finish()
}

/// Close the ring at the signer's slot: find `r'` with `r' + H_s` invertible, where
/// `H_s = H(m, ring, U_s)` and `U_s = r'·pk - decoys`, and return `(U_s, r·sk / (r' + H_s))`.
///
/// Each `r'` comes from `sample_r_prime`, at most [`MAX_CLOSURE_ATTEMPTS`] times.
fn close_ring(
    pk: &G1Projective,
    decoys: &G1Projective,
    prefix: &Transcript,
    r_sk: &Scalar,
    mut sample_r_prime: impl FnMut() -> Result<Scalar, Error>,
) -> Result<(G1Projective, Scalar), Error> {
    for _ in 0..MAX_CLOSURE_ATTEMPTS {
        let r_prime = sample_r_prime()?;
        let u_s = pk * r_prime - decoys;
        let h_s = prefix.clone().with(&u_s).finish();
        match scalar::invert(&(r_prime + h_s)) {
            Ok(denominator) => return Ok((u_s, r_sk * denominator)),
            Err(_) => tracing::debug!("r' + H_s is zero, resampling r'"),
        }
    }
    Err(Error::NonInvertibleScalar)
}

/// The proof response `Pi = t - e·S`. A zero `e` would make the proof independent of `S`.
fn proof_response(t: &Scalar, e: &Scalar, s_s: &Scalar) -> Result<Scalar, Error> {
    if *e == Scalar::zero() {
        return Err(Error::NonInvertibleScalar);
    }
    Ok(t - e * s_s)
}

/// Recover `S_pt = C·R_M + e⁻¹·(T - Pi·P)`, which equals `r·P` for an honest signature.
///
/// Returns `None` when `e` is zero.
fn proof_point(params: &Parameters, sig: &Signature, e: &Scalar) -> Option<G1Projective> {
    let e_inv = scalar::invert(e).ok()?;
    Some(sig.r_m * sig.c + (sig.t - params.g1() * sig.pi) * e_inv)
}

/// Sign `msg` on behalf of `ring`.
///
/// Fails with [`Error::InvalidRingIndex`] unless the signer's public key occurs exactly once in
/// the ring, with [`Error::RandomnessFailure`] if `rng` fails, and with
/// [`Error::NonInvertibleScalar`] in the negligible event of a zero proof challenge or of every
/// attempt to close the ring hitting `r' + H_s = 0`.
#[tracing::instrument(skip_all, fields(ring_size = ring.len()))]
pub fn sign(
    params: &Parameters,
    rng: &mut impl Rng,
    msg: &[u8],
    ring: &Ring,
    signer: &Signer,
) -> Result<Signature, Error> {
    let s = ring.position_of(signer.public_key())?;
    let p = params.g1();
    let sk = signer.secret_key().as_scalar();
    let pk = signer.public_key().to_element();

    // R_M = r_M·P
    let r_m = scalar::random(rng)?;
    let big_r_m = p * r_m;

    // C_S = H(r·sk·pk, r·P) and S = r - C_S·r_M
    let r = scalar::random(rng)?;
    let r_sk = r * sk;
    let masked_key = pk * r_sk;
    let c_s = Transcript::new().with(&masked_key).with(&(p * r)).finish();
    let s_s = r - c_s * r_m;

    // Random commitments for every other member. Sampling stays sequential since it drives the
    // caller's rng; the signer's slot is overwritten below.
    let mut commitments = vec![G1Projective::identity(); ring.len()];
    for (i, u) in commitments.iter_mut().enumerate() {
        if i != s {
            *u = element::random_multiple(p, rng)?;
        }
    }
    let prefix = member_transcript(msg, ring);
    let challenges = map_commitments(&commitments, |u| prefix.clone().with(u).finish());
    let decoys = ring_sum(ring, &commitments, &challenges, Some(s));

    // Close the ring: U_s = r'·pk - Σ_{i≠s}(U_i + H_i·pk_i), V = r·sk / (r' + H_s)
    let (u_s, v) = close_ring(&pk, &decoys, &prefix, &r_sk, || scalar::random(&mut *rng))?;
    commitments[s] = u_s;

    // C = H(r·sk·pk, C_S·R_M + S·P), e = H(ring, m, T, C), Pi = t - e·S
    let t = scalar::random(rng)?;
    let big_t = p * t;
    let c = Transcript::new()
        .with(&masked_key)
        .with(&(big_r_m * c_s + p * s_s))
        .finish();
    let e = proof_challenge(msg, ring, &big_t, &c);
    let pi = proof_response(&t, &e, &s_s)?;

    Ok(Signature {
        r_m: big_r_m,
        commitments,
        v,
        c,
        t: big_t,
        pi,
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

    let prefix = member_transcript(msg, ring);
    let challenges = map_commitments(&sig.commitments, |u| prefix.clone().with(u).finish());

    let e = proof_challenge(msg, ring, &sig.t, &sig.c);
    let s_pt = match proof_point(params, sig, &e) {
        Some(s_pt) => s_pt,
        None => {
            tracing::debug!("proof challenge is zero");
            return false;
        }
    };

    // S_sum = Σ_i (U_i + H_i·pk_i)
    let s_sum = ring_sum(ring, &sig.commitments, &challenges, None);

    let c_check = Transcript::new()
        .with(&(s_sum * sig.v))
        .with(&s_pt)
        .finish();
    if c_check != sig.c {
        tracing::debug!("recomputed challenge does not match");
        return false;
    }
    true
}
