// Path: crates/crypto/src/sign/eddsa/tests/mod.rs

use super::*;

#[test]
fn test_keypair_generation() {
    let keypair = Ed25519KeyPair::generate();
    let message = b"Test message";

    // Sign
    let signature = keypair.sign_message(message);

    // Verify
    let public_key = keypair.public_key();
    assert!(public_key.verify(message, &signature.to_bytes()).is_ok());
}

#[test]
fn test_serialization_roundtrip() {
    let keypair = Ed25519KeyPair::generate();

    let public_bytes = keypair.public_key().to_bytes();
    assert_eq!(public_bytes.len(), 32);

    let public_key = Ed25519PublicKey::from_bytes(&public_bytes).unwrap();
    assert_eq!(public_key, keypair.public_key());

    let restored = Ed25519KeyPair::from_seed(&keypair.seed());
    assert_eq!(restored.public_key(), keypair.public_key());
}

#[test]
fn test_signatures_are_deterministic() {
    let seed = [7u8; 32];
    let a = Ed25519KeyPair::from_seed(&seed);
    let b = Ed25519KeyPair::from_seed(&seed);
    let message = b"Test message for persistence";
    assert_eq!(a.sign_message(message), b.sign_message(message));
    assert_eq!(a.sign_message(message).to_bytes().len(), 64);
}

#[test]
fn test_wrong_signature_fails() {
    let keypair1 = Ed25519KeyPair::generate();
    let keypair2 = Ed25519KeyPair::generate();
    let message = b"Test message";

    let signature = keypair1.sign(message).unwrap();

    // Verify with keypair2's public key should fail
    assert_eq!(
        keypair2.public_key().verify(message, &signature),
        Err(CryptoError::VerificationFailed)
    );
}

#[test]
fn test_tampered_message_fails() {
    let keypair = Ed25519KeyPair::generate();
    let message = b"Original message";
    let tampered = b"Tampered message";

    let signature = keypair.sign(message).unwrap();

    let public_key = keypair.public_key();
    assert!(public_key.verify(message, &signature).is_ok());
    assert!(public_key.verify(tampered, &signature).is_err());
}

#[test]
fn test_malformed_material_is_rejected() {
    let keypair = Ed25519KeyPair::generate();
    assert!(matches!(
        keypair.public_key().verify(b"m", &[0u8; 10]),
        Err(CryptoError::InvalidSignature(_))
    ));
    assert!(matches!(
        Ed25519PublicKey::from_bytes(&[1u8; 31]),
        Err(CryptoError::InvalidKey(_))
    ));
}

#[test]
fn test_signer_identity_is_the_public_key() {
    let keypair = Ed25519KeyPair::from_seed(&[3u8; 32]);
    let pk = keypair.public_key().to_array();
    assert_eq!(keypair.identity(), Identity::Ed25519(pk));

    let sig = keypair.sign(b"digest").unwrap();
    assert!(verify_ed25519(&pk, b"digest", &sig).is_ok());
}
