//! Error types for the harbor-wallet library

use thiserror::Error;

/// Custom error type for key, account, derivation, and wallet operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Catch-all for a textual key that could not be decoded
    #[error("invalid key")]
    InvalidKey,

    /// The decoded leading byte is not the one the caller asked for
    #[error("invalid version byte: expected {expected:#04x}, found {found:#04x}")]
    InvalidVersionByte { expected: u8, found: u8 },

    /// The decoded leading byte is not a known version byte at all
    #[error("unrecognized version byte {0:#04x}")]
    UnknownVersionByte(u8),

    /// The trailing two bytes do not match the checksum of the body
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// The string is not valid base58 or is too short to carry a key
    #[error("malformed key string: {0}")]
    Malformed(String),

    /// Signature verification failed, including wrong-length signatures
    #[error("signature verification failed")]
    InvalidSignature,

    /// The account does not hold a seed
    #[error("cannot access seed")]
    NoSeed,

    /// The account does not hold the private key needed to sign
    #[error("cannot sign")]
    CannotSign,

    /// The account does not hold the private key needed to decrypt
    #[error("cannot decrypt")]
    CannotDecrypt,

    /// A derivation step was attempted with an index outside the hardened range
    #[error("non-hardened index {0} rejected (ed25519 only supports hardened derivation)")]
    NonHardenedIndex(u32),

    /// A textual derivation path could not be parsed
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// An internal derivation primitive failed
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The recovery phrase failed BIP-39 validation
    #[error("invalid mnemonic phrase")]
    InvalidMnemonic,

    /// The requested mnemonic length is not a standard BIP-39 word count
    #[error("invalid word count {0} (must be 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),

    /// Key material did not decode to a valid curve point
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The AEAD rejected the plaintext
    #[error("encryption failed")]
    EncryptionFailed,

    /// The ciphertext is truncated, tampered with, or for a different key
    #[error("decryption failed")]
    DecryptionFailed,

    /// Peer-identity marshalling failed
    #[error("peer identity error: {0}")]
    Identity(String),
}

/// Result type for harbor-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
