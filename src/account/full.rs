//! The seed-holding account variant

use std::fmt;

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use libp2p_identity::{Keypair, PeerId};
use rand::{rngs::OsRng, RngCore};

use crate::account::verify_with;
use crate::crypto::seal;
use crate::error::Result;
use crate::identity;
use crate::key::{self, VersionByte, PAYLOAD_LENGTH};

/// A full account: holds the string-encoded seed and can perform every
/// operation, including signing and decryption.
///
/// The seed is the only state. Raw seed bytes, the keypair, and the
/// address are recomputed on demand; nothing is cached.
#[derive(Clone, PartialEq, Eq)]
pub struct Full {
    seed: String,
}

impl Full {
    /// Wrap an already-validated seed string. Callers go through
    /// [`Account::parse`](crate::Account::parse) for untrusted input.
    pub(crate) fn new(seed: String) -> Self {
        Self { seed }
    }

    /// Create a full account from fresh OS entropy.
    ///
    /// Exhaustion of the entropy source is unrecoverable and aborts
    /// inside the RNG; it is the one failure this library does not
    /// report as an error value.
    pub fn random() -> Self {
        let mut raw_seed = [0u8; PAYLOAD_LENGTH];
        OsRng.fill_bytes(&mut raw_seed);

        Self::from_raw_seed(&raw_seed)
    }

    /// Create a full account from a raw 32-byte ed25519 seed.
    pub fn from_raw_seed(raw_seed: &[u8; PAYLOAD_LENGTH]) -> Self {
        Self { seed: key::encode(VersionByte::Seed, raw_seed) }
    }

    /// The string-encoded public key.
    pub fn address(&self) -> Result<String> {
        Ok(key::encode(VersionByte::AccountId, self.verifying_key()?.as_bytes()))
    }

    /// The string-encoded seed.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The last four bytes of the public key.
    pub fn hint(&self) -> Result<[u8; 4]> {
        let public = self.verifying_key()?.to_bytes();
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&public[28..]);
        Ok(hint)
    }

    /// The associated libp2p peer ID.
    pub fn peer_id(&self) -> Result<PeerId> {
        identity::peer_id(&self.verifying_key()?)
    }

    /// The full keypair in the peer-identity layer's marshalling.
    pub fn libp2p_keypair(&self) -> Result<Keypair> {
        identity::keypair(&self.signing_key()?)
    }

    /// Verify that `signature` signs `message` under this account's
    /// public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        verify_with(&self.verifying_key()?, message, signature)
    }

    /// Sign `message` with the derived private key.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.signing_key()?.sign(message).to_bytes().to_vec())
    }

    /// Encrypt `message` to this account's public key.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        seal::encrypt(&self.verifying_key()?, message)
    }

    /// Decrypt a message sealed to this account.
    pub fn decrypt(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        seal::decrypt(&self.signing_key()?, sealed)
    }

    fn raw_seed(&self) -> Result<[u8; PAYLOAD_LENGTH]> {
        key::decode(VersionByte::Seed, &self.seed)
    }

    /// The keypair is a pure function of the seed (standard ed25519 seed
    /// expansion), so recomputing it here is cheap and side-effect free.
    fn signing_key(&self) -> Result<SigningKey> {
        Ok(SigningKey::from_bytes(&self.raw_seed()?))
    }

    fn verifying_key(&self) -> Result<VerifyingKey> {
        Ok(self.signing_key()?.verifying_key())
    }
}

impl fmt::Debug for Full {
    /// Never prints the seed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Full").finish_non_exhaustive()
    }
}
