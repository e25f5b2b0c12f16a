//! Regression tests for the public API.
//!
//! Expected values are the test vectors of the Spritz paper,
//! and frozen outputs for inputs the paper does not cover.

use digest::{Update, VariableOutput};
use rand::{Rng, SeedableRng};
use spritz::{hash, SpritzError, SpritzHash, SpritzState, SpritzStream};

#[test]
fn empty_key_keystream_is_frozen() -> anyhow::Result<()> {
    let mut dst = [0u8; 8];
    SpritzStream::new(&[]).transform(&mut dst, &[0u8; 8])?;
    assert_eq!(hex::encode(dst), "041445ce39fce3df");
    Ok(())
}

#[test]
fn keystream_test_vectors() {
    for (key, expected) in [
        (&b"ABC"[..], "779a8e01f9e9cbc0"),
        (&b"spam"[..], "f0609a1df143cebf"),
        (&b"arcfour"[..], "1afa8b5ee337dbc7"),
    ] {
        let mut stream = SpritzStream::new(key);
        let keystream = (0..8).map(|_| stream.next_byte()).collect::<Vec<_>>();
        assert_eq!(hex::encode(keystream), expected);
    }
}

#[test]
fn hash_test_vectors() {
    for (message, expected) in [
        (&b"ABC"[..], "028fa2b48b934a18"),
        (&b"spam"[..], "acbba0813f300d3a"),
        (&b"arcfour"[..], "ff8cf268094c87b9"),
    ] {
        assert_eq!(hex::encode(&hash(message, 32)[..8]), expected);
    }
}

#[test]
fn transform_rejects_short_destination() {
    let mut stream = SpritzStream::new(b"key");
    let err = stream.transform(&mut [0u8; 3], &[1u8; 4]).unwrap_err();
    assert_eq!(err, SpritzError::BufferTooShort { needed: 4, got: 3 });
}

#[test]
fn hash_through_digest_traits() {
    let hasher = <SpritzHash as VariableOutput>::new(32)
        .unwrap()
        .chain(b"arc")
        .chain(b"four");
    let mut out = [0u8; 32];
    hasher.finalize_variable(&mut out).unwrap();
    assert_eq!(out.to_vec(), hash(&b"arcfour"[..], 32));
}

#[test]
fn hash_through_io_copy() -> anyhow::Result<()> {
    let message = vec![0x42u8; 10_000];
    let mut hasher = SpritzHash::new(64);
    let copied = std::io::copy(&mut &message[..], &mut hasher)?;
    assert_eq!(copied, 10_000);
    assert_eq!(hasher.sum(&[]), hash(&message, 64));
    Ok(())
}

#[test]
fn rng_from_seed_is_reproducible() {
    let mut first = SpritzStream::seed_from_u64(7);
    let mut second = SpritzStream::seed_from_u64(7);
    let a: [u64; 4] = first.gen();
    let b: [u64; 4] = second.gen();
    assert_eq!(a, b);
}

#[test]
fn wide_state_is_usable() -> anyhow::Result<()> {
    let mut state = SpritzState::<u16>::new(4096)?;
    state.key_setup(b"wide");
    assert_eq!(state.pending(), 0);
    assert_eq!(state.squeeze_vec(16).len(), 16);
    assert!(SpritzState::<u8>::new(4096).is_err());
    Ok(())
}
