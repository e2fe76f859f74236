use crate::encoders::algorithms::errors::DecodeError;
use sha2::{Digest, Sha256};

/// Length of the checksum tag appended to checksummed payloads.
pub const CHECKSUM_LEN: usize = 4;

/// First four bytes of SHA-256(SHA-256(data)).
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);

    let mut tag = [0u8; CHECKSUM_LEN];
    tag.copy_from_slice(&second[..CHECKSUM_LEN]);
    tag
}

/// Returns `data` followed by its checksum.
pub fn append(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    out.extend_from_slice(data);
    out.extend_from_slice(&checksum(data));
    out
}

/// Verifies the trailing checksum and strips it in place.
pub fn verify_and_strip(payload: &mut Vec<u8>) -> Result<(), DecodeError> {
    if payload.len() < CHECKSUM_LEN {
        return Err(DecodeError::ChecksumTooShort {
            actual: payload.len(),
        });
    }

    let split = payload.len() - CHECKSUM_LEN;
    let mut expected = [0u8; CHECKSUM_LEN];
    expected.copy_from_slice(&payload[split..]);
    let computed = checksum(&payload[..split]);
    if expected != computed {
        return Err(DecodeError::ChecksumMismatch { expected, computed });
    }

    payload.truncate(split);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_checksum() {
        let payload = hex::decode("00010966776006953D5567439E5E39F86A0D273BEE").unwrap();
        assert_eq!(hex::encode(checksum(&payload)), "d61967f6");
    }

    #[test]
    fn test_append_then_verify() {
        let mut wrapped = append(b"hello");
        assert_eq!(wrapped.len(), 9);
        verify_and_strip(&mut wrapped).unwrap();
        assert_eq!(wrapped, b"hello");
    }

    #[test]
    fn test_short_payload_rejected() {
        let mut short = vec![1, 2, 3];
        assert_eq!(
            verify_and_strip(&mut short),
            Err(DecodeError::ChecksumTooShort { actual: 3 })
        );
    }

    #[test]
    fn test_empty_payload_checksum_roundtrips() {
        let mut wrapped = append(&[]);
        assert_eq!(wrapped.len(), CHECKSUM_LEN);
        verify_and_strip(&mut wrapped).unwrap();
        assert!(wrapped.is_empty());
    }

    #[test]
    fn test_corruption_detected() {
        let mut wrapped = append(b"payload");
        wrapped[2] ^= 0x01;
        assert!(matches!(
            verify_and_strip(&mut wrapped),
            Err(DecodeError::ChecksumMismatch { .. })
        ));
    }
}
