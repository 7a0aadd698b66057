//! The public-identity account variant

use ed25519_dalek::VerifyingKey;
use libp2p_identity::PeerId;

use crate::account::verify_with;
use crate::crypto::seal;
use crate::error::{Error, Result};
use crate::key::{self, VersionByte};

/// An account to which only the address is known. It can verify
/// signatures and encrypt messages, but cannot sign, decrypt, or reveal a
/// seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOnly {
    address: String,
}

impl AddressOnly {
    /// Wrap an already-validated address string. Callers go through
    /// [`Account::parse`](crate::Account::parse) for untrusted input.
    pub(crate) fn new(address: String) -> Self {
        Self { address }
    }

    /// The string-encoded public key.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Always fails: an address-only account holds no seed.
    pub fn seed(&self) -> Result<&str> {
        Err(Error::NoSeed)
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
        crate::identity::peer_id(&self.verifying_key()?)
    }

    /// Verify that `signature` signs `message` under this account's
    /// public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        verify_with(&self.verifying_key()?, message, signature)
    }

    /// Always fails: signing needs the private key.
    pub fn sign(&self, _message: &[u8]) -> Result<Vec<u8>> {
        Err(Error::CannotSign)
    }

    /// Encrypt `message` to this account's public key.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        seal::encrypt(&self.verifying_key()?, message)
    }

    /// Always fails: decryption needs the private key.
    pub fn decrypt(&self, _sealed: &[u8]) -> Result<Vec<u8>> {
        Err(Error::CannotDecrypt)
    }

    fn verifying_key(&self) -> Result<VerifyingKey> {
        let public = key::decode(VersionByte::AccountId, &self.address)?;
        VerifyingKey::from_bytes(&public).map_err(|_| Error::InvalidPublicKey)
    }
}
