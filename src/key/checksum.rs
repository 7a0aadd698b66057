//! CRC16 checksum over key material.
//!
//! The exact algorithm (CRC16-XModem: polynomial 0x1021, initial value
//! 0x0000, checksum appended little-endian) is a frozen wire contract.
//! Every deployed address and seed string embeds it, so it must never
//! change.

use crate::error::{Error, Result};

const POLYNOMIAL: u16 = 0x1021;

/// Compute the CRC16-XModem checksum of `data`, in little-endian byte order.
pub fn checksum(data: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0x0000;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }

    crc.to_le_bytes()
}

/// Check that `expected` is the checksum of `data`.
pub fn validate(data: &[u8], expected: &[u8]) -> Result<()> {
    if expected != checksum(data) {
        return Err(Error::ChecksumMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // The standard CRC16-XModem check value.
        assert_eq!(checksum(b"123456789"), 0x31c3u16.to_le_bytes());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(checksum(b""), [0, 0]);
    }

    #[test]
    fn test_validate() {
        let data = b"hello world";
        let sum = checksum(data);

        assert!(validate(data, &sum).is_ok());
        assert_eq!(validate(data, &[sum[0] ^ 1, sum[1]]), Err(Error::ChecksumMismatch));
        assert_eq!(validate(b"hello worle", &sum), Err(Error::ChecksumMismatch));
    }
}
