//! Gzip + base64 codec for embedding binary payloads in generated documents.
//!
//! Used for the security asset bundle and for the per-role bootstrap
//! documents handed to the stack template. The encoded form is standard
//! padded base64, so it survives any JSON or YAML string context.

use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::domain::error::DomainError;

/// Compress `data` and encode the result as text.
///
/// `subject` names the payload in the error on failure.
pub fn compress(subject: &str, data: &[u8]) -> Result<String, DomainError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| failed(subject, format!("gzip: {e}")))?;
    let compressed = encoder
        .finish()
        .map_err(|e| failed(subject, format!("gzip: {e}")))?;
    Ok(STANDARD.encode(compressed))
}

/// Reverse of [`compress`].
pub fn decompress(subject: &str, encoded: &str) -> Result<Vec<u8>, DomainError> {
    let compressed = STANDARD
        .decode(encoded)
        .map_err(|e| failed(subject, format!("base64: {e}")))?;
    let mut out = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut out)
        .map_err(|e| failed(subject, format!("gunzip: {e}")))?;
    Ok(out)
}

fn failed(subject: &str, reason: String) -> DomainError {
    DomainError::CompactionFailed {
        subject: subject.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_text_safe() {
        let encoded = compress("blob", &[0, 159, 146, 150, 255, b'\n', b'"']).unwrap();
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        );
    }

    #[test]
    fn repetitive_payload_shrinks() {
        let pem = "-----BEGIN CERTIFICATE-----\n".repeat(200);
        let encoded = compress("ca.pem", pem.as_bytes()).unwrap();
        assert!(encoded.len() < pem.len());
    }

    #[test]
    fn empty_payload_restores_empty() {
        let encoded = compress("empty", b"").unwrap();
        assert_eq!(decompress("empty", &encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn invalid_base64_names_subject() {
        let err = decompress("worker.pem", "not base64 !!").unwrap_err();
        match err {
            DomainError::CompactionFailed { subject, reason } => {
                assert_eq!(subject, "worker.pem");
                assert!(reason.starts_with("base64"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn valid_base64_that_is_not_gzip_fails() {
        let encoded = STANDARD.encode(b"plain text, not gzip");
        let err = decompress("ca.pem", &encoded).unwrap_err();
        assert!(matches!(err, DomainError::CompactionFailed { .. }));
    }
}
