//! Versioned, checksummed textual key encoding.
//!
//! A key string is `base58(version(1) ‖ payload(32) ‖ checksum(2))` where
//! the checksum covers the version byte and payload. The version byte says
//! what kind of material follows (public address vs. private seed), so a
//! seed pasted where an address is expected fails loudly instead of being
//! silently accepted, and the checksum catches transcription typos before
//! any cryptographic operation runs.

mod checksum;

use crate::error::{Error, Result};

/// Length in bytes of every encoded payload (an ed25519 public key or a
/// raw seed).
pub const PAYLOAD_LENGTH: usize = 32;

const CHECKSUM_LENGTH: usize = 2;

/// A decoded string must at least carry a version byte and a checksum.
const MIN_DECODED_LENGTH: usize = 3;

/// One of the possible prefix values for a key base string--the string
/// that when base58-encoded yields a final key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum VersionByte {
    /// Public account identity. Base58-encodes with a leading 'P'.
    AccountId = 0xdd,
    /// Private account seed. Base58-encodes with a leading 'S'.
    Seed = 0xff,
}

impl VersionByte {
    /// The raw byte value of this version tag.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for VersionByte {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            0xdd => Ok(VersionByte::AccountId),
            0xff => Ok(VersionByte::Seed),
            other => Err(Error::UnknownVersionByte(other)),
        }
    }
}

/// Encode `payload` as a key string with the given version byte.
///
/// The fixed-size payload makes wrong-length input unrepresentable, so
/// encoding cannot fail.
pub fn encode(version: VersionByte, payload: &[u8; PAYLOAD_LENGTH]) -> String {
    let mut raw = Vec::with_capacity(1 + PAYLOAD_LENGTH + CHECKSUM_LENGTH);
    raw.push(version.as_byte());
    raw.extend_from_slice(payload);

    let sum = checksum::checksum(&raw);
    raw.extend_from_slice(&sum);

    bs58::encode(raw).into_string()
}

/// Decode the provided key string into its raw payload, checking the
/// checksum and ensuring `expected` is the version byte actually encoded
/// into the string.
pub fn decode(expected: VersionByte, src: &str) -> Result<[u8; PAYLOAD_LENGTH]> {
    let raw = decode_string(src)?;

    // decode into components
    let found = raw[0];
    let (body, sum) = raw.split_at(raw.len() - CHECKSUM_LENGTH);

    // ensure version byte is expected
    if found != expected.as_byte() {
        return Err(Error::InvalidVersionByte { expected: expected.as_byte(), found });
    }

    // ensure checksum is valid
    checksum::validate(body, sum)?;

    let payload = &body[1..];
    payload.try_into().map_err(|_| {
        Error::Malformed(format!(
            "payload is {} bytes; expected {}",
            payload.len(),
            PAYLOAD_LENGTH
        ))
    })
}

/// Extract the version byte from the provided key string without
/// validating the checksum.
///
/// Useful to classify a string before deciding which kind of account to
/// construct from it.
pub fn peek_version(src: &str) -> Result<VersionByte> {
    let raw = decode_string(src)?;
    VersionByte::try_from(raw[0])
}

/// Decode a base58 string into raw bytes and ensure it could potentially
/// be key encoded, i.e. it has room for a version byte and a checksum.
/// Neither is checked by this function.
fn decode_string(src: &str) -> Result<Vec<u8>> {
    let raw = bs58::decode(src)
        .into_vec()
        .map_err(|e| Error::Malformed(format!("base58 decode failed: {e}")))?;

    if raw.len() < MIN_DECODED_LENGTH {
        return Err(Error::Malformed(format!(
            "decoded value is {} bytes; minimum valid length is {}",
            raw.len(),
            MIN_DECODED_LENGTH
        )));
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SEED_STRING: &str = "SSkCuz4p1C2LpyAHxmL4HnpMojTyzjZj6rGUtHzn53dLmV9p";

    #[test]
    fn test_round_trip() {
        let payload = [7u8; PAYLOAD_LENGTH];

        for version in [VersionByte::AccountId, VersionByte::Seed] {
            let encoded = encode(version, &payload);
            assert_eq!(decode(version, &encoded).unwrap(), payload);
            assert_eq!(peek_version(&encoded).unwrap(), version);
        }
    }

    #[test]
    fn test_zero_seed_fixture() {
        // Frozen regression fixture for the deployed string format.
        let encoded = encode(VersionByte::Seed, &[0u8; PAYLOAD_LENGTH]);
        assert_eq!(encoded, ZERO_SEED_STRING);
        assert_eq!(decode(VersionByte::Seed, ZERO_SEED_STRING).unwrap(), [0u8; PAYLOAD_LENGTH]);
    }

    #[test]
    fn test_version_discrimination() {
        let err = decode(VersionByte::AccountId, ZERO_SEED_STRING).unwrap_err();
        assert_eq!(err, Error::InvalidVersionByte { expected: 0xdd, found: 0xff });

        let address = encode(VersionByte::AccountId, &[3u8; PAYLOAD_LENGTH]);
        let err = decode(VersionByte::Seed, &address).unwrap_err();
        assert_eq!(err, Error::InvalidVersionByte { expected: 0xff, found: 0xdd });
    }

    #[test]
    fn test_checksum_corruption() {
        let encoded = encode(VersionByte::Seed, &[9u8; PAYLOAD_LENGTH]);
        let mut raw = bs58::decode(&encoded).into_vec().unwrap();

        // Flip one bit in the payload region.
        raw[10] ^= 0x04;
        let corrupt = bs58::encode(&raw).into_string();
        assert_eq!(decode(VersionByte::Seed, &corrupt).unwrap_err(), Error::ChecksumMismatch);

        // Flip one bit in the checksum region.
        let mut raw = bs58::decode(&encoded).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let corrupt = bs58::encode(&raw).into_string();
        assert_eq!(decode(VersionByte::Seed, &corrupt).unwrap_err(), Error::ChecksumMismatch);
    }

    #[test]
    fn test_malformed_input() {
        // '0' is not in the base58 alphabet.
        assert!(matches!(
            decode(VersionByte::Seed, "0invalid0"),
            Err(Error::Malformed(_))
        ));

        // Decodes to fewer than three bytes.
        assert!(matches!(decode(VersionByte::Seed, "zz"), Err(Error::Malformed(_))));
        assert!(matches!(peek_version(""), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_wrong_payload_length() {
        // A structurally valid string whose payload is not 32 bytes.
        let mut raw = vec![VersionByte::Seed.as_byte()];
        raw.extend_from_slice(&[1u8; 16]);
        let sum = super::checksum::checksum(&raw);
        raw.extend_from_slice(&sum);
        let encoded = bs58::encode(&raw).into_string();

        assert!(matches!(decode(VersionByte::Seed, &encoded), Err(Error::Malformed(_))));
    }

    #[test]
    fn test_peek_unknown_version() {
        let mut raw = vec![0x42u8];
        raw.extend_from_slice(&[0u8; PAYLOAD_LENGTH]);
        let sum = super::checksum::checksum(&raw);
        raw.extend_from_slice(&sum);
        let encoded = bs58::encode(&raw).into_string();

        assert_eq!(peek_version(&encoded).unwrap_err(), Error::UnknownVersionByte(0x42));
    }
}
