//! Cipher session lifecycle through the public API

use std::thread;

use keywrap_api::Error;
use keywrap_symmetric::{
    find, variant, CipherContext, ContextParamsUpdate, Direction, SessionState,
};
use keywrap_tests::logging;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const KEK: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
    0x0F,
];

#[test]
fn full_lifecycle_and_reinit() {
    logging::init();
    let v = find("AES-128-WRAP").unwrap();
    let key = hex::decode("00112233445566778899AABBCCDDEEFF").unwrap();
    let expected = hex::decode("1FA68B0A8112B447AEF34BD8FB5A7B829D3E862371D2CFE5").unwrap();

    let mut s = v.new_session(Direction::Encrypt);
    assert_eq!(s.state(), SessionState::Uninitialized);
    s.encrypt_init(Some(&KEK), None).unwrap();
    assert_eq!(s.state(), SessionState::Keyed);

    let mut out = vec![0u8; s.output_size(key.len()).unwrap()];
    assert_eq!(s.process(&key, &mut out).unwrap(), 24);
    assert_eq!(out, expected);
    assert_eq!(s.state(), SessionState::Processed);

    // A second message needs another init
    assert!(matches!(
        s.process(&key, &mut out),
        Err(Error::InvalidState { .. })
    ));
    s.encrypt_init(None, None).unwrap();
    assert_eq!(s.state(), SessionState::Keyed);
    out.fill(0);
    s.process(&key, &mut out).unwrap();
    assert_eq!(out, expected);

    assert_eq!(s.finalize(&mut []).unwrap(), 0);
    assert_eq!(s.state(), SessionState::Finalized);
    assert!(matches!(
        s.encrypt_init(Some(&KEK), None),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(s.output_size(16), Err(Error::InvalidState { .. })));
}

#[test]
fn query_before_key_and_short_buffer() {
    let v = variant(192, true).unwrap();
    let mut s = v.new_session(Direction::Encrypt);
    assert_eq!(s.output_size(20).unwrap(), 32);
    assert!(matches!(
        s.process(&[0u8; 20], &mut [0u8; 32]),
        Err(Error::InvalidState { .. })
    ));

    s.encrypt_init(Some(&[7u8; 24]), None).unwrap();
    let mut short = [0u8; 31];
    assert!(matches!(
        s.process(&[0u8; 20], &mut short),
        Err(Error::BufferTooSmall {
            required: 32,
            actual: 31,
            ..
        })
    ));
    // The failed call leaves the session ready
    assert_eq!(s.state(), SessionState::Keyed);
}

#[test]
fn wrong_direction_and_bad_lengths() {
    let v = variant(256, false).unwrap();
    let mut s = v.new_session(Direction::Decrypt);
    assert!(matches!(
        s.encrypt_init(Some(&[0u8; 32]), None),
        Err(Error::InvalidState { .. })
    ));
    assert!(matches!(
        s.decrypt_init(Some(&[0u8; 16]), None),
        Err(Error::InvalidKeyLength {
            expected: 32,
            actual: 16,
            ..
        })
    ));
    assert!(matches!(
        s.decrypt_init(None, Some(&[0u8; 4])),
        Err(Error::InvalidIvLength {
            expected: 8,
            actual: 4,
            ..
        })
    ));
    assert_eq!(s.state(), SessionState::Uninitialized);
}

#[test]
fn parameter_surface() {
    let v = variant(128, true).unwrap();
    let mut s = v.new_session(Direction::Encrypt);
    let before = s.get_params();
    assert_eq!(before.key_len, 16);
    assert_eq!(before.iv_len, 4);
    assert!(before.padding);
    assert!(!before.iv_set);

    s.set_params(&ContextParamsUpdate::key_len(16)).unwrap();
    assert!(matches!(
        s.set_params(&ContextParamsUpdate::key_len(32)),
        Err(Error::ParameterRejected { .. })
    ));
    assert_eq!(s.get_params(), before);

    s.encrypt_init(None, Some(&[1, 2, 3, 4])).unwrap();
    assert!(s.get_params().iv_set);
}

#[test]
fn custom_iv_must_match_on_unwrap() {
    let v = variant(128, false).unwrap();
    let iv = [0x11u8; 8];
    let wrapped = v.wrap_key(&KEK, Some(&iv), &[0xEE; 16]).unwrap();

    assert!(v
        .unwrap_key(&KEK, None, &wrapped)
        .unwrap_err()
        .is_integrity_failure());
    assert_eq!(&v.unwrap_key(&KEK, Some(&iv), &wrapped).unwrap()[..], &[0xEE; 16]);
}

#[test]
fn independent_sessions_on_threads() {
    logging::init();
    let handles: Vec<_> = (0u64..6)
        .map(|i| {
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(i);
                let v = &keywrap_symmetric::VARIANTS[i as usize];
                let mut kek = vec![0u8; v.key_len()];
                let mut key = vec![0u8; 40];
                rng.fill_bytes(&mut kek);
                rng.fill_bytes(&mut key);

                for _ in 0..50 {
                    let wrapped = v.wrap_key(&kek, None, &key).unwrap();
                    let unwrapped = v.unwrap_key(&kek, None, &wrapped).unwrap();
                    assert_eq!(&unwrapped[..], &key[..]);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
