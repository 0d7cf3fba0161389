//! Per-member work shared by both schemes: hashing each member's commitment and summing
//! `U_i + h_i·pk_i` over the ring.
//!
//! With the `parallel` feature the ring is split into chunks of at least `MIN_CHUNK` members;
//! each chunk is reduced on its own and the partial sums are combined by group addition, which is
//! associative and commutative, so the result does not depend on how the work was split.

use crate::{types::*, PublicKey, Ring};
use group::Group;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fewest ring members handed to a single worker.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
const MIN_CHUNK: usize = 16;

/// Compute `f(U_i)` for every commitment, preserving order.
pub(crate) fn map_commitments<T, F>(commitments: &[G1Projective], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&G1Projective) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        commitments.par_iter().with_min_len(MIN_CHUNK).map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        commitments.iter().map(f).collect()
    }
}

/// Compute `Σ (U_i + h_i·pk_i)` over every member of the ring except the one at `skip`.
///
/// The commitments and challenges are matched to ring members by position.
pub(crate) fn ring_sum(
    ring: &Ring,
    commitments: &[G1Projective],
    challenges: &[Scalar],
    skip: Option<usize>,
) -> G1Projective {
    let term = |(i, ((pk, u), h)): (usize, ((&PublicKey, &G1Projective), &Scalar))| {
        if Some(i) == skip {
            G1Projective::identity()
        } else {
            u + pk.to_element() * h
        }
    };

    #[cfg(feature = "parallel")]
    {
        ring.par_iter()
            .zip(commitments.par_iter())
            .zip(challenges.par_iter())
            .enumerate()
            .with_min_len(MIN_CHUNK)
            .map(term)
            .reduce(G1Projective::identity, |a, b| a + b)
    }
    #[cfg(not(feature = "parallel"))]
    {
        ring.iter()
            .zip(commitments)
            .zip(challenges)
            .enumerate()
            .map(term)
            .sum()
    }
}
