//! Peer-identity marshalling
//!
//! The networking layer identifies peers by a libp2p `PeerId` derived
//! from an ed25519 public key. This module converts account key material
//! into that layer's expected shapes; the transport itself is out of
//! scope.

use ed25519_dalek::{SigningKey, VerifyingKey};
use libp2p_identity::{Keypair, PeerId};

use crate::error::{Error, Result};

/// The libp2p peer ID for an ed25519 public key.
pub fn peer_id(public: &VerifyingKey) -> Result<PeerId> {
    let public = libp2p_identity::ed25519::PublicKey::try_from_bytes(public.as_bytes())
        .map_err(|e| Error::Identity(e.to_string()))?;

    Ok(PeerId::from_public_key(&public.into()))
}

/// A libp2p keypair backed by the same 32-byte ed25519 seed.
pub fn keypair(identity: &SigningKey) -> Result<Keypair> {
    let mut seed = identity.to_bytes();

    Keypair::ed25519_from_bytes(&mut seed).map_err(|e| Error::Identity(e.to_string()))
}
