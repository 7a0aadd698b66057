//! Hardened-only hierarchical deterministic key derivation.
//!
//! Follows the SLIP-0010 construction for ed25519: the master key is an
//! HMAC-SHA512 expansion of the wallet seed keyed with a fixed
//! domain-separation constant, and every child step mixes the parent's
//! private key into an HMAC keyed by the parent chain code. Non-hardened
//! derivation is mathematically undefined for this curve family, so any
//! index below [`FIRST_HARDENED_INDEX`] is rejected.

use std::fmt;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Smallest index in the hardened range (2^31).
pub const FIRST_HARDENED_INDEX: u32 = 0x8000_0000;

/// Domain-separation constant for the master key expansion. Distinguishes
/// this scheme from other HD schemes operating on the same raw seed.
const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// A (key, chain code) pair produced by one derivation step.
///
/// Only the key half of the terminal pair ever leaves this module, as the
/// raw seed handed to the account layer. Both halves are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChainKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ChainKey {
    /// Derive the master chain key from a high-entropy seed.
    pub fn master(seed: &[u8]) -> Result<Self> {
        let mut hmac = <Hmac<Sha512> as KeyInit>::new_from_slice(MASTER_HMAC_KEY)
            .map_err(|_| Error::KeyDerivation("HMAC init failed".to_string()))?;

        hmac.update(seed);
        Ok(Self::split(&hmac.finalize().into_bytes()))
    }

    /// Derive the hardened child at `index`.
    ///
    /// Fails with [`Error::NonHardenedIndex`] if `index` is below the
    /// hardened range; there is no public derivation mode for ed25519.
    pub fn derive(&self, index: u32) -> Result<Self> {
        if index < FIRST_HARDENED_INDEX {
            return Err(Error::NonHardenedIndex(index));
        }

        let mut hmac = <Hmac<Sha512> as KeyInit>::new_from_slice(&self.chain_code)
            .map_err(|_| Error::KeyDerivation("HMAC init failed".to_string()))?;

        let mut data = Vec::with_capacity(37);
        data.push(0x00);
        data.extend_from_slice(&self.key);
        data.extend_from_slice(&index.to_be_bytes());

        hmac.update(&data);
        let child = Self::split(&hmac.finalize().into_bytes());
        data.zeroize();

        Ok(child)
    }

    /// The key half of this pair, used as a raw account seed.
    pub fn raw_seed(&self) -> [u8; 32] {
        self.key
    }

    fn split(bytes: &[u8]) -> Self {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&bytes[0..32]);
        chain_code.copy_from_slice(&bytes[32..64]);
        Self { key, chain_code }
    }
}

impl fmt::Debug for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainKey").finish_non_exhaustive()
    }
}

/// Parse a BIP-32 style textual derivation path into its indices.
///
/// A trailing `'` marks a hardened component. The path itself may name
/// non-hardened indices; they are rejected when a derivation step is
/// actually applied.
pub fn parse_path(path: &str) -> Result<Vec<u32>> {
    if !path.starts_with("m/") {
        return Err(Error::InvalidPath(path.to_string()));
    }

    let components = path.trim_start_matches("m/").split('/');
    let mut result = Vec::new();

    for component in components {
        if component.is_empty() {
            continue;
        }

        let hardened = component.ends_with('\'');
        let digits = component.trim_end_matches('\'');
        let index = digits
            .parse::<u32>()
            .map_err(|_| Error::InvalidPath(format!("invalid component: {component}")))?;

        if hardened {
            let index = index
                .checked_add(FIRST_HARDENED_INDEX)
                .ok_or_else(|| Error::InvalidPath(format!("index out of range: {component}")))?;
            result.push(index);
        } else {
            result.push(index);
        }
    }

    Ok(result)
}

/// Derive the chain key at `path` from a high-entropy seed.
pub fn derive_path(seed: &[u8], path: &str) -> Result<ChainKey> {
    let mut chain_key = ChainKey::master(seed)?;

    for index in parse_path(path)? {
        chain_key = chain_key.derive(index)?;
    }

    Ok(chain_key)
}
