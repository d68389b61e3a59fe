//! Tests for the crypto providers

use cfb_domain::Error;
use cfb_providers::{
    AesCbcCipher, CipherProvider, KeyDerivationProvider, OsSecureRandom,
    Pbkdf2Sha256KeyDerivation, SecureRandomSource,
};

#[test]
fn test_os_random_fills_distinct_buffers() {
    let random = OsSecureRandom::new();
    let a = random.random_bytes(32).expect("random bytes");
    let b = random.random_bytes(32).expect("random bytes");

    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}

#[test]
fn test_pbkdf2_matches_known_vector() {
    // RFC 7914 section 11: PBKDF2-HMAC-SHA256, "passwd" / "salt", 1 iteration
    let kdf = Pbkdf2Sha256KeyDerivation::new();
    let key = kdf.derive_key("passwd", b"salt", 1, 64).expect("derive");
    let expected_prefix = [0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f];

    assert_eq!(&key[..8], &expected_prefix);
}

#[test]
fn test_pbkdf2_depends_on_salt_and_password() {
    let kdf = Pbkdf2Sha256KeyDerivation::new();
    let base = kdf.derive_key("secret", b"salt-one", 100, 32).expect("derive");
    let other_salt = kdf.derive_key("secret", b"salt-two", 100, 32).expect("derive");
    let other_password = kdf.derive_key("Secret", b"salt-one", 100, 32).expect("derive");

    assert_eq!(base.len(), 32);
    assert_ne!(base, other_salt);
    assert_ne!(base, other_password);
    assert_eq!(kdf.provider_name(), "pbkdf2-hmac-sha256");
}

#[test]
fn test_pbkdf2_rejects_zero_iterations() {
    let kdf = Pbkdf2Sha256KeyDerivation::new();
    match kdf.derive_key("secret", b"salt", 0, 32) {
        Err(Error::InvalidArgument { .. }) => {}
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_aes_cbc_round_trip_with_padding() {
    let cipher = AesCbcCipher::new();
    let key = [7u8; 32];
    let iv = [9u8; 16];
    let plaintext = b"exactly sixteen!";

    let ciphertext = cipher.encrypt(&key, &iv, plaintext).expect("encrypt");
    // a full block of PKCS#7 padding is appended to block-aligned input
    assert_eq!(ciphertext.len(), 32);

    let decrypted = cipher.decrypt(&key, &iv, &ciphertext).expect("decrypt");
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_aes_cbc_rejects_bad_lengths() {
    let cipher = AesCbcCipher::new();
    assert!(cipher.encrypt(&[0u8; 16], &[0u8; 16], b"data").is_err());
    assert!(cipher.encrypt(&[0u8; 32], &[0u8; 12], b"data").is_err());
    assert!(cipher.decrypt(&[0u8; 32], &[0u8; 16], &[1u8; 15]).is_err());
    assert!(cipher.decrypt(&[0u8; 32], &[0u8; 16], &[]).is_err());
}

#[test]
fn test_aes_cbc_truncated_ciphertext_fails() {
    let cipher = AesCbcCipher::new();
    let key = [1u8; 32];
    let iv = [2u8; 16];
    let ciphertext = cipher
        .encrypt(&key, &iv, b"a message that spans more than one block")
        .expect("encrypt");

    let truncated = &ciphertext[..ciphertext.len() - 1];
    assert!(cipher.decrypt(&key, &iv, truncated).is_err());
    assert_eq!(cipher.provider_name(), "aes-256-cbc");
}
