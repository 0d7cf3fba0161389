mod test_utils;

use rand::Rng as _;
use ringsig::{
    rscp::{self, Signature},
    Error, Parameters, Ring, Signer,
};
use ringsig_crypto::{pairing, G1Affine, G1Projective, G2Affine, Transcript};
use test_utils::{ring_of, seeded_rng, BrokenRng, OTHER_MESSAGE, SIGNED_MESSAGE};

#[test]
fn signatures_verify_for_every_ring_size() {
    let mut rng = seeded_rng();
    let params = Parameters::new();

    for &n in &[2, 3, 4, 10, 100] {
        let (signers, ring) = ring_of(&params, &mut rng, n);
        let s = rng.gen_range(0..n);
        let sig = rscp::sign(&params, &mut rng, SIGNED_MESSAGE.as_bytes(), &ring, &signers[s])
            .unwrap();
        assert_eq!(sig.commitments().len(), n);
        assert!(
            rscp::verify(&params, SIGNED_MESSAGE.as_bytes(), &ring, &sig),
            "ring of {} signed at {} failed to verify",
            n,
            s
        );
    }
}

#[test]
fn different_message_is_rejected() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 4);

    let sig = rscp::sign(
        &params,
        &mut rng,
        SIGNED_MESSAGE.as_bytes(),
        &ring,
        &signers[2],
    )
    .unwrap();
    assert!(rscp::verify(&params, SIGNED_MESSAGE.as_bytes(), &ring, &sig));
    assert!(!rscp::verify(&params, OTHER_MESSAGE.as_bytes(), &ring, &sig));
}

#[test]
fn pairing_identity_holds() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 5);
    let msg = b"message";
    let sig = rscp::sign(&params, &mut rng, msg, &ring, &signers[3]).unwrap();

    // Recompute Σ_i (h_i·pk_i + U_i) from scratch.
    let sum: G1Projective = ring
        .iter()
        .zip(sig.commitments())
        .map(|(pk, u)| {
            let h = Transcript::new().with(u).with_bytes(msg).with(&ring).finish();
            pk.to_element() * h + u
        })
        .sum();

    assert_eq!(
        pairing(&params.g1_affine(), &G2Affine::from(sig.v())),
        pairing(&G1Affine::from(sum), &params.g2_affine())
    );
}

#[test]
fn every_flipped_byte_is_rejected() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 4);
    let sig = rscp::sign(&params, &mut rng, b"message", &ring, &signers[0]).unwrap();
    let bytes = sig.to_bytes();

    for i in 0..bytes.len() {
        let mut tampered = bytes.clone();
        tampered[i] ^= 0x01;
        match Signature::from_bytes(&tampered) {
            Err(_) => {}
            Ok(forged) => assert!(
                !rscp::verify(&params, b"message", &ring, &forged),
                "flipping byte {} produced a valid signature",
                i
            ),
        }
    }
}

#[test]
fn ring_order_matters() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 3);
    let sig = rscp::sign(&params, &mut rng, b"message", &ring, &signers[1]).unwrap();

    let permuted = Ring::new(vec![ring[1], ring[0], ring[2]]).unwrap();
    assert!(!rscp::verify(&params, b"message", &permuted, &sig));
}

#[test]
fn signing_at_explicit_index() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 4);

    let sig = rscp::sign_at_index(&params, &mut rng, b"message", &ring, &signers[1], 1).unwrap();
    assert!(rscp::verify(&params, b"message", &ring, &sig));

    assert_eq!(
        rscp::sign_at_index(&params, &mut rng, b"message", &ring, &signers[1], 2),
        Err(Error::InvalidRingIndex)
    );
    assert_eq!(
        rscp::sign_at_index(&params, &mut rng, b"message", &ring, &signers[1], ring.len()),
        Err(Error::InvalidRingIndex)
    );
}

#[test]
fn signature_encodings_round_trip() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 3);
    let sig = rscp::sign(&params, &mut rng, b"message", &ring, &signers[2]).unwrap();

    assert_eq!(sig.encoded_len(), 8 + 3 * 96 + 192);
    let decoded = Signature::from_bytes(&sig.to_bytes()).unwrap();
    assert_eq!(decoded, sig);
    assert!(rscp::verify(&params, b"message", &ring, &decoded));

    let serialized = bincode::serialize(&sig).unwrap();
    let deserialized: Signature = bincode::deserialize(&serialized).unwrap();
    assert_eq!(deserialized, sig);
}

#[test]
fn non_member_cannot_sign() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (_, ring) = ring_of(&params, &mut rng, 3);
    let outsider = Signer::new(&params, &mut rng).unwrap();

    assert_eq!(
        rscp::sign(&params, &mut rng, b"message", &ring, &outsider),
        Err(Error::InvalidRingIndex)
    );
}

#[test]
fn duplicated_signer_cannot_sign() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 2);
    let doubled = Ring::new(vec![ring[0], ring[1], ring[0]]).unwrap();

    assert_eq!(
        rscp::sign(&params, &mut rng, b"message", &doubled, &signers[0]),
        Err(Error::InvalidRingIndex)
    );
    assert!(rscp::sign(&params, &mut rng, b"message", &doubled, &signers[1]).is_ok());
}

#[test]
fn broken_rng_is_reported() {
    let mut rng = seeded_rng();
    let params = Parameters::new();
    let (signers, ring) = ring_of(&params, &mut rng, 3);

    assert_eq!(
        rscp::sign(&params, &mut BrokenRng, b"message", &ring, &signers[0]),
        Err(Error::RandomnessFailure)
    );
}

#[test]
fn huge_declared_length_fails_to_deserialize() {
    let bytes = (1u64 << 60).to_le_bytes();
    assert!(bincode::deserialize::<Signature>(&bytes).is_err());
}
