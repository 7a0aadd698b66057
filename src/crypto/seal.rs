//! Hybrid encryption to an ed25519 identity.
//!
//! An account's ed25519 keys double as X25519 keys: the Edwards public
//! key maps to its Montgomery form, and the private scalar is the lower
//! half of the RFC 8032 seed expansion. Encryption generates an ephemeral
//! X25519 keypair, runs Diffie-Hellman against the recipient, derives a
//! symmetric key with HKDF-SHA256, and seals the message with
//! XChaCha20-Poly1305.
//!
//! Wire shape: `ephemeral_pub(32) ‖ nonce(24) ‖ ciphertext`.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};
use ed25519_dalek::{SigningKey, VerifyingKey};
use hkdf::Hkdf;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256, Sha512};
use x25519_dalek::{EphemeralSecret, PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::error::{Error, Result};

const EPHEMERAL_PUBLIC_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 24;

/// Domain-separation label for the sealed-message key schedule.
const KEY_INFO: &[u8] = b"harbor-wallet seal v1";

/// Encrypt `plaintext` so that only the holder of the seed behind
/// `recipient` can read it.
pub fn encrypt(recipient: &VerifyingKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let recipient_x = X25519PublicKey::from(recipient.to_montgomery().to_bytes());

    let ephemeral = EphemeralSecret::random_from_rng(OsRng);
    let ephemeral_public = X25519PublicKey::from(&ephemeral);

    let shared = ephemeral.diffie_hellman(&recipient_x);
    if !shared.was_contributory() {
        return Err(Error::InvalidPublicKey);
    }

    let key = derive_key(shared.as_bytes(), ephemeral_public.as_bytes(), recipient_x.as_bytes())?;
    let cipher = XChaCha20Poly1305::new(Key::from_slice(&key));

    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(XNonce::from_slice(&nonce), plaintext)
        .map_err(|_| Error::EncryptionFailed)?;

    let mut out = Vec::with_capacity(EPHEMERAL_PUBLIC_LENGTH + NONCE_LENGTH + ciphertext.len());
    out.extend_from_slice(ephemeral_public.as_bytes());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a message sealed to the identity behind `identity`.
pub fn decrypt(identity: &SigningKey, sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < EPHEMERAL_PUBLIC_LENGTH + NONCE_LENGTH {
        return Err(Error::DecryptionFailed);
    }

    let (header, ciphertext) = sealed.split_at(EPHEMERAL_PUBLIC_LENGTH + NONCE_LENGTH);
    let (ephemeral_bytes, nonce) = header.split_at(EPHEMERAL_PUBLIC_LENGTH);

    let mut ephemeral_public = [0u8; EPHEMERAL_PUBLIC_LENGTH];
    ephemeral_public.copy_from_slice(ephemeral_bytes);
    let ephemeral_public = X25519PublicKey::from(ephemeral_public);

    let secret = x25519_secret(identity);
    let shared = secret.diffie_hellman(&ephemeral_public);
    if !shared.was_contributory() {
        return Err(Error::DecryptionFailed);
    }

    let recipient_x = X25519PublicKey::from(identity.verifying_key().to_montgomery().to_bytes());
    let key = derive_key(shared.as_bytes(), ephemeral_public.as_bytes(), recipient_x.as_bytes())?;
    let cipher = XChaCha20Poly1305::new(Key::from_slice(&key));

    cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::DecryptionFailed)
}

/// The X25519 secret matching an ed25519 signing key: the lower 32 bytes
/// of the SHA-512 seed expansion. Clamping happens inside x25519 itself.
fn x25519_secret(identity: &SigningKey) -> StaticSecret {
    let digest = Sha512::digest(identity.to_bytes());
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&digest[..32]);

    let secret = StaticSecret::from(scalar);
    scalar.zeroize();
    secret
}

fn derive_key(shared: &[u8; 32], ephemeral: &[u8; 32], recipient: &[u8; 32]) -> Result<[u8; 32]> {
    let mut salt = [0u8; 64];
    salt[..32].copy_from_slice(ephemeral);
    salt[32..].copy_from_slice(recipient);

    let hkdf = Hkdf::<Sha256>::new(Some(&salt), shared);
    let mut key = [0u8; 32];
    hkdf.expand(KEY_INFO, &mut key)
        .map_err(|_| Error::KeyDerivation("HKDF expand failed".to_string()))?;

    Ok(key)
}
