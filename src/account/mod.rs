//! Account management
//!
//! An [`Account`] is a capability-limited view of a keypair: the
//! [`Full`] variant owns a seed and can sign and decrypt, while
//! [`AddressOnly`] holds just the public identity and can only verify and
//! encrypt. Both are immutable once constructed and serialize to the
//! textual key format of the [`key`](crate::key) module.

mod address_only;
mod full;

pub use address_only::AddressOnly;
pub use full::Full;

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Signature, Verifier, VerifyingKey, SIGNATURE_LENGTH};
use libp2p_identity::PeerId;

use crate::error::{Error, Result};
use crate::key::{self, VersionByte};

/// A peer account: either a full keypair or an address-only public
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    /// Holds the seed; every operation is available.
    Full(Full),
    /// Holds only the public identity; private-key operations fail.
    AddressOnly(AddressOnly),
}

impl Account {
    /// Construct an account from a string which is either an address or a
    /// seed. A seed yields a [`Full`] account with signing capabilities.
    ///
    /// Checksum and malformation errors on the first attempt surface
    /// directly; only a version-byte mismatch falls through to trying the
    /// seed encoding.
    pub fn parse(address_or_seed: &str) -> Result<Account> {
        match key::decode(VersionByte::AccountId, address_or_seed) {
            Ok(_) => {
                return Ok(Account::AddressOnly(AddressOnly::new(
                    address_or_seed.to_string(),
                )))
            }
            Err(Error::InvalidVersionByte { .. }) => {}
            Err(err) => return Err(err),
        }

        key::decode(VersionByte::Seed, address_or_seed)?;
        Ok(Account::Full(Full::new(address_or_seed.to_string())))
    }

    /// Create a random full account from OS entropy.
    pub fn random() -> Account {
        Account::Full(Full::random())
    }

    /// Create a full account from a raw 32-byte ed25519 seed.
    pub fn from_raw_seed(raw_seed: &[u8; key::PAYLOAD_LENGTH]) -> Account {
        Account::Full(Full::from_raw_seed(raw_seed))
    }

    /// The string-encoded public key.
    pub fn address(&self) -> Result<String> {
        match self {
            Account::Full(full) => full.address(),
            Account::AddressOnly(public) => Ok(public.address().to_string()),
        }
    }

    /// The string-encoded seed, if this account holds one.
    pub fn seed(&self) -> Result<&str> {
        match self {
            Account::Full(full) => Ok(full.seed()),
            Account::AddressOnly(_) => Err(Error::NoSeed),
        }
    }

    /// The last four bytes of the public key.
    pub fn hint(&self) -> Result<[u8; 4]> {
        match self {
            Account::Full(full) => full.hint(),
            Account::AddressOnly(public) => public.hint(),
        }
    }

    /// The associated libp2p peer ID.
    pub fn peer_id(&self) -> Result<PeerId> {
        match self {
            Account::Full(full) => full.peer_id(),
            Account::AddressOnly(public) => public.peer_id(),
        }
    }

    /// Verify that `signature` signs `message` under this account's
    /// public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        match self {
            Account::Full(full) => full.verify(message, signature),
            Account::AddressOnly(public) => public.verify(message, signature),
        }
    }

    /// Sign `message`. Fails with [`Error::CannotSign`] for address-only
    /// accounts.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Account::Full(full) => full.sign(message),
            Account::AddressOnly(public) => public.sign(message),
        }
    }

    /// Encrypt `message` to this account's public key.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Account::Full(full) => full.encrypt(message),
            Account::AddressOnly(public) => public.encrypt(message),
        }
    }

    /// Decrypt a sealed message. Fails with [`Error::CannotDecrypt`] for
    /// address-only accounts.
    pub fn decrypt(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        match self {
            Account::Full(full) => full.decrypt(sealed),
            Account::AddressOnly(public) => public.decrypt(sealed),
        }
    }

    /// Whether this account holds a seed.
    pub fn is_full(&self) -> bool {
        matches!(self, Account::Full(_))
    }
}

impl fmt::Display for Account {
    /// The canonical string form: the seed string for a full account, the
    /// address for an address-only one. `parse` round-trips it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Account::Full(full) => f.write_str(full.seed()),
            Account::AddressOnly(public) => f.write_str(public.address()),
        }
    }
}

impl FromStr for Account {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Account::parse(s)
    }
}

/// Shared ed25519 verification: reject wrong-length signatures before the
/// primitive ever runs.
pub(crate) fn verify_with(public: &VerifyingKey, message: &[u8], signature: &[u8]) -> Result<()> {
    let bytes: [u8; SIGNATURE_LENGTH] = signature.try_into().map_err(|_| Error::InvalidSignature)?;
    let signature = Signature::from_bytes(&bytes);

    public
        .verify(message, &signature)
        .map_err(|_| Error::InvalidSignature)
}
