//! Wallet orchestration: recovery phrase to derived accounts
//!
//! A wallet is nothing but a recovery phrase. Deriving an account runs
//! the phrase through BIP-39 seed stretching, walks the hardened account
//! namespace, and hands the resulting raw seed to the account layer, so
//! every account index yields an independent keypair while the phrase
//! alone recovers all of them.

use tracing::debug;
use zeroize::Zeroize;

use crate::account::Full;
use crate::crypto::hd::{self, FIRST_HARDENED_INDEX};
use crate::crypto::mnemonic::{generate_mnemonic, mnemonic_to_seed, WordCount};
use crate::error::{Error, Result};

/// Hardened namespace prefix under which accounts are derived.
///
/// Frozen: deployed wallets derive their account tree from this path, so
/// changing it would orphan every existing account.
pub const ACCOUNT_PATH_PREFIX: &str = "m/44'/406'";

/// A hierarchical deterministic wallet over a single recovery phrase.
#[derive(Clone)]
pub struct Wallet {
    recovery_phrase: String,
}

impl Wallet {
    /// Create a wallet with a freshly generated recovery phrase of the
    /// given length.
    pub fn generate(word_count: WordCount) -> Result<Self> {
        let recovery_phrase = generate_mnemonic(word_count)?;
        debug!(words = word_count.words(), "generated wallet");

        Ok(Self { recovery_phrase })
    }

    /// Create a wallet with a fresh recovery phrase of `words` words.
    /// Fails with [`Error::InvalidWordCount`] before any entropy is drawn
    /// if the count is not a standard BIP-39 length.
    pub fn from_word_count(words: usize) -> Result<Self> {
        Self::generate(WordCount::try_from(words)?)
    }

    /// Wrap an existing recovery phrase. The phrase is validated when an
    /// account is derived, not here.
    pub fn from_mnemonic(recovery_phrase: impl Into<String>) -> Self {
        Self { recovery_phrase: recovery_phrase.into() }
    }

    /// The recovery phrase backing this wallet.
    pub fn recovery_phrase(&self) -> &str {
        &self.recovery_phrase
    }

    /// Derive the full account at `index`.
    ///
    /// Fails with [`Error::InvalidMnemonic`] if the phrase does not pass
    /// BIP-39 validation, before any seed stretching runs.
    pub fn derive_account(&self, index: u32, passphrase: &str) -> Result<Full> {
        if index >= FIRST_HARDENED_INDEX {
            return Err(Error::InvalidPath(format!("account index {index} out of range")));
        }

        let mut seed = mnemonic_to_seed(&self.recovery_phrase, passphrase)?;
        let namespace = hd::derive_path(&seed, ACCOUNT_PATH_PREFIX);
        seed.zeroize();

        let account_key = namespace?.derive(FIRST_HARDENED_INDEX + index)?;
        debug!(index, "derived account");

        Ok(Full::from_raw_seed(&account_key.raw_seed()))
    }
}

impl std::fmt::Debug for Wallet {
    /// Never prints the recovery phrase.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::mnemonic::validate_mnemonic;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate() {
        let wallet = Wallet::generate(WordCount::Twelve).unwrap();
        assert!(validate_mnemonic(wallet.recovery_phrase()).is_ok());
        assert_eq!(wallet.recovery_phrase().split_whitespace().count(), 12);
    }

    #[test]
    fn test_from_word_count_rejects_nonstandard_lengths() {
        assert!(Wallet::from_word_count(24).is_ok());
        assert_eq!(Wallet::from_word_count(13).unwrap_err(), Error::InvalidWordCount(13));
    }

    #[test]
    fn test_invalid_mnemonic_rejected_at_derive_time() {
        let wallet = Wallet::from_mnemonic("not a valid phrase");
        assert_eq!(wallet.derive_account(0, "").unwrap_err(), Error::InvalidMnemonic);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let wallet = Wallet::from_mnemonic(PHRASE);

        let a = wallet.derive_account(3, "").unwrap();
        let b = wallet.derive_account(3, "").unwrap();
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_accounts_are_independent() {
        let wallet = Wallet::from_mnemonic(PHRASE);

        let first = wallet.derive_account(0, "").unwrap();
        let second = wallet.derive_account(1, "").unwrap();
        assert_ne!(first.address().unwrap(), second.address().unwrap());
    }

    #[test]
    fn test_passphrase_changes_accounts() {
        let wallet = Wallet::from_mnemonic(PHRASE);

        let plain = wallet.derive_account(0, "").unwrap();
        let salted = wallet.derive_account(0, "lighthouse").unwrap();
        assert_ne!(plain.seed(), salted.seed());
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let wallet = Wallet::from_mnemonic(PHRASE);
        assert!(matches!(
            wallet.derive_account(FIRST_HARDENED_INDEX, ""),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let wallet = Wallet::from_mnemonic(PHRASE);
        assert!(!format!("{wallet:?}").contains("abandon"));
    }
}
