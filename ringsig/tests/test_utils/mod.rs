#![allow(dead_code)]

use rand::SeedableRng;
use rand_core::{CryptoRng, RngCore};
use ringsig::{Parameters, Ring, Signer};
use std::num::NonZeroU32;

pub const SIGNED_MESSAGE: &str = "这是用来正确签名的信息。";
pub const OTHER_MESSAGE: &str = "这是用来错误验证的信息。";

// Seeded rng for replicable tests.
pub fn seeded_rng() -> impl ringsig::Rng {
    const TEST_RNG_SEED: [u8; 32] = *b"NEVER USE THIS FOR ANYTHING REAL";
    rand::rngs::StdRng::from_seed(TEST_RNG_SEED)
}

/// An rng whose fallible interface always fails.
pub struct BrokenRng;

impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        unimplemented!("only the fallible interface is exercised")
    }

    fn next_u64(&mut self) -> u64 {
        unimplemented!("only the fallible interface is exercised")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!("only the fallible interface is exercised")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into())
    }
}

impl CryptoRng for BrokenRng {}

/// `n` fresh signers and the ring of their public keys, in order.
pub fn ring_of(params: &Parameters, rng: &mut impl ringsig::Rng, n: usize) -> (Vec<Signer>, Ring) {
    let signers = (0..n)
        .map(|_| Signer::new(params, rng).unwrap())
        .collect::<Vec<_>>();
    let ring = Ring::new(signers.iter().map(|s| *s.public_key()).collect()).unwrap();
    (signers, ring)
}
