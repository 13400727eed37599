//======================================================================
// ARC4 Crate Test Suite
//======================================================================
#![cfg(test)]

use crate::{apply_keystream, Arc4, Arc4KeySize, Keystream};
use cipher::consts::{U1, U256, U3, U4, U6};
use cipher::{KeyInit, StreamCipher};

const PLAINTEXT: &[u8] = b"Test message for the ARC4 keystream cipher.";

#[test]
fn arc4_reference_vectors() {
    let cases: [(&[u8], &[u8], &str); 3] = [
        (b"Key", b"Plaintext", "bbf316e8d940af0ad3"),
        (b"Wiki", b"pedia", "1021bf0420"),
        (b"Secret", b"Attack at dawn", "45a01f645fc35b383552544b9bf5"),
    ];
    for (key, plaintext, expected) in cases {
        let mut buffer = plaintext.to_vec();
        apply_keystream(key, &mut buffer).unwrap();
        assert_eq!(hex::encode(&buffer), expected);
    }
}

#[test]
fn typed_cipher_matches_runtime_keystream() {
    let mut typed = b"Plaintext".to_vec();
    Arc4::<U3>::new(b"Key".into()).apply_keystream(&mut typed);

    let mut runtime = b"Plaintext".to_vec();
    Keystream::new(b"Key").unwrap().apply(&mut runtime);
    assert_eq!(typed, runtime);

    let mut wiki = b"pedia".to_vec();
    Arc4::<U4>::new(b"Wiki".into()).apply_keystream(&mut wiki);
    assert_eq!(hex::encode(&wiki), "1021bf0420");

    let mut secret = b"Attack at dawn".to_vec();
    Arc4::<U6>::new_from_slice(b"Secret")
        .unwrap()
        .apply_keystream(&mut secret);
    assert_eq!(hex::encode(&secret), "45a01f645fc35b383552544b9bf5");
}

#[test]
fn arc4_roundtrip() {
    let key = b"key";
    let mut buffer = PLAINTEXT.to_vec();

    // Encrypt
    apply_keystream(key, &mut buffer).unwrap();
    assert_ne!(buffer, PLAINTEXT, "Ciphertext should not match plaintext");

    // Decrypt
    apply_keystream(key, &mut buffer).unwrap();
    assert_eq!(buffer, PLAINTEXT, "Decrypted text should match original");
}

#[test]
fn split_application_continues_the_keystream() {
    let mut whole = PLAINTEXT.to_vec();
    Arc4::<U3>::new(b"key".into()).apply_keystream(&mut whole);

    let mut parts = PLAINTEXT.to_vec();
    let mut cipher = Arc4::<U3>::new(b"key".into());
    let (head, tail) = parts.split_at_mut(7);
    cipher.apply_keystream(head);
    cipher.apply_keystream(tail);

    assert_eq!(whole, parts, "Keystream should continue across calls");
}

#[test]
fn keystream_iterator_yields_reference_bytes() {
    let ks: Vec<u8> = Keystream::new(b"Key").unwrap().take(10).collect();
    assert_eq!(hex::encode(ks), "eb9f7781b734ca72a719");
}

#[test]
fn key_length_limits() {
    assert!(Keystream::new(b"").is_err());
    assert!(Keystream::new(&[0x55; 256]).is_ok());
    assert!(Keystream::new(&[0x55; 257]).is_err());
    assert!(Arc4::<U3>::new_from_slice(b"four").is_err());
}

#[test]
fn typed_key_sizes_cover_one_to_256_bytes() {
    fn accepts<K: Arc4KeySize>() {}
    accepts::<U1>();
    accepts::<U256>();

    for key in [&[0x42u8][..], &[0x55u8; 256][..]] {
        let mut runtime = PLAINTEXT.to_vec();
        Keystream::new(key).unwrap().apply(&mut runtime);

        let mut typed = PLAINTEXT.to_vec();
        if key.len() == 1 {
            Arc4::<U1>::new_from_slice(key).unwrap().apply_keystream(&mut typed);
        } else {
            Arc4::<U256>::new_from_slice(key).unwrap().apply_keystream(&mut typed);
        }
        assert_eq!(typed, runtime, "key length {}", key.len());
    }
}
