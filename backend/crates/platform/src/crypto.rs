//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as unpadded base64url
pub fn to_b64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded base64url to bytes
pub fn from_b64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);

        let bytes = random_bytes(0);
        assert_eq!(bytes.len(), 0);
    }

    #[test]
    fn test_random_bytes_not_all_zeros() {
        let bytes = random_bytes(32);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_b64url_roundtrip() {
        let data = b"hello world";
        let encoded = to_b64url(data);
        let decoded = from_b64url(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_b64url_no_padding() {
        // 1 byte encodes to 2 chars without '='
        let encoded = to_b64url(&[0xff]);
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_b64url_rejects_invalid() {
        assert!(from_b64url("not base64!!").is_err());
        // Padded input is rejected by the no-pad engine
        assert!(from_b64url("aGVsbG8=").is_err());
    }
}
