/*!
This crate implements two ring signature schemes over BLS12-381, built on the primitives in
`ringsig-crypto`:

- [`brfl`]: a pairing-free scheme whose signatures carry scalar responses and a proof that the
  signer's commitment closes the ring.
- [`rscp`]: a pairing-based scheme whose signature is one commitment per ring member and a single
  element of G2, checked with one pairing equation.

A ring signature convinces a verifier that *some* member of a [`Ring`] of public keys signed a
message without revealing which one. The order of the ring is part of every challenge: a
signature only verifies against the ring in the order it was signed with.

```
# use ringsig::{brfl, Parameters, Ring, Signer};
# fn main() -> Result<(), ringsig::Error> {
let mut rng = rand::thread_rng();
let params = Parameters::new();

let signers = (0..4)
    .map(|_| Signer::new(&params, &mut rng))
    .collect::<Result<Vec<_>, _>>()?;
let ring = Ring::new(signers.iter().map(|s| *s.public_key()).collect())?;

let sig = brfl::sign(&params, &mut rng, b"attack at dawn", &ring, &signers[2])?;
assert!(brfl::verify(&params, b"attack at dawn", &ring, &sig));
assert!(!brfl::verify(&params, b"retreat at dusk", &ring, &sig));
# Ok(())
# }
```
*/
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(broken_intra_doc_links)]
pub mod brfl;
pub mod rscp;

pub use keys::{PublicKey, Signer};
pub use ring::Ring;
pub use ringsig_crypto::{Error, Parameters, Rng};

mod encoding;
mod keys;
mod ring;
mod sum;

#[allow(unused)]
mod types {
    pub use ringsig_crypto::{
        element, pairing, scalar, G1Affine, G1Projective, G2Affine, G2Projective, Scalar,
        SerializeElement, Transcript, TranscriptInput,
    };
}
