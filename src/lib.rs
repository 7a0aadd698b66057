//! Harbor Wallet - deterministic account and key management for
//! peer-to-peer networks
//!
//! This library provides the pieces a peer needs to own an identity:
//! a versioned, checksummed textual encoding for addresses and seeds,
//! a capability-limited [`Account`] abstraction over an ed25519 keypair,
//! hardened-only hierarchical deterministic derivation, and a [`Wallet`]
//! that turns one recovery phrase into a tree of independent accounts.
//!
//! ```no_run
//! use harbor_wallet::{Account, Wallet, WordCount};
//!
//! # fn main() -> harbor_wallet::Result<()> {
//! let wallet = Wallet::generate(WordCount::Twelve)?;
//! let account = wallet.derive_account(0, "")?;
//!
//! let signature = account.sign(b"hello")?;
//! account.verify(b"hello", &signature)?;
//!
//! // Strings round-trip through the public parser.
//! let public = Account::parse(&account.address()?)?;
//! assert!(public.sign(b"hello").is_err());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod key;
pub mod wallet;

// Re-export commonly used types for convenience
pub use account::{Account, AddressOnly, Full};
pub use crypto::mnemonic::WordCount;
pub use error::{Error, Result};
pub use wallet::Wallet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
