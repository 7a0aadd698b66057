//! Recovery phrase generation and handling
//!
//! Word-list validation and PBKDF2 seed stretching are delegated to the
//! external BIP-39 implementation; this module only fixes the entropy
//! sizes and maps failures into the crate error type.

use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// Number of words in a recovery phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WordCount {
    /// 12 words (128 bits of entropy)
    Twelve,
    /// 15 words (160 bits of entropy)
    Fifteen,
    /// 18 words (192 bits of entropy)
    Eighteen,
    /// 21 words (224 bits of entropy)
    TwentyOne,
    /// 24 words (256 bits of entropy)
    TwentyFour,
}

impl WordCount {
    /// Number of words this variant stands for
    pub fn words(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::TwentyOne => 21,
            Self::TwentyFour => 24,
        }
    }

    /// Entropy size in bits backing a phrase of this length
    pub fn entropy_bits(self) -> usize {
        match self {
            Self::Twelve => 128,
            Self::Fifteen => 160,
            Self::Eighteen => 192,
            Self::TwentyOne => 224,
            Self::TwentyFour => 256,
        }
    }

    fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }
}

impl TryFrom<usize> for WordCount {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self> {
        match count {
            12 => Ok(Self::Twelve),
            15 => Ok(Self::Fifteen),
            18 => Ok(Self::Eighteen),
            21 => Ok(Self::TwentyOne),
            24 => Ok(Self::TwentyFour),
            other => Err(Error::InvalidWordCount(other)),
        }
    }
}

/// Generate a new random mnemonic phrase with the given word count
pub fn generate_mnemonic(word_count: WordCount) -> Result<String> {
    let mut entropy = vec![0u8; word_count.entropy_bytes()];
    OsRng.fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy(&entropy).map_err(|_| Error::InvalidMnemonic)?;

    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    Mnemonic::parse_normalized(phrase)
        .map(|_| ())
        .map_err(|_| Error::InvalidMnemonic)
}

/// Stretch a mnemonic phrase and passphrase into a 64-byte binary seed
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> Result<[u8; 64]> {
    let mnemonic = Mnemonic::parse_normalized(phrase).map_err(|_| Error::InvalidMnemonic)?;

    Ok(mnemonic.to_seed(passphrase))
}
