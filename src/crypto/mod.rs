//! Cryptographic building blocks
//!
//! This module provides the mnemonic handling, hierarchical deterministic
//! derivation, and hybrid encryption that the account and wallet layers
//! are built on.

pub mod hd;
pub mod mnemonic;
pub mod seal;
