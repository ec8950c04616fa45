//! RS256 key management for JWT signing and verification.
//!
//! Keys arrive as base64-encoded PEM strings in the environment, which
//! keeps multi-line PEM files out of `.env` parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, TokenError};

/// An RSA signing/verification key pair for one token kind
#[derive(Clone)]
pub struct KeyPair {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material must never appear in logs
        f.debug_struct("KeyPair").finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Creates a key pair from PEM strings
    pub fn from_pem(private_key_pem: &str, public_key_pem: &str) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("Invalid private key format: {}", e),
            })
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyLoadError {
                message: format!("Invalid public key format: {}", e),
            })
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
        })
    }

    /// Creates a key pair from base64-encoded PEM strings, the form
    /// they take in environment variables
    pub fn from_base64_pem(
        private_key_b64: &str,
        public_key_b64: &str,
    ) -> Result<Self, DomainError> {
        let private_pem = decode_b64(private_key_b64, "private key")?;
        let public_pem = decode_b64(public_key_b64, "public key")?;
        Self::from_pem(&private_pem, &public_pem)
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

fn decode_b64(value: &str, label: &str) -> Result<String, DomainError> {
    let bytes = STANDARD.decode(value).map_err(|e| {
        DomainError::Token(TokenError::KeyLoadError {
            message: format!("Failed to base64-decode {}: {}", label, e),
        })
    })?;
    String::from_utf8(bytes).map_err(|e| {
        DomainError::Token(TokenError::KeyLoadError {
            message: format!("{} is not valid UTF-8 PEM: {}", label, e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::service::test_keys;

    #[test]
    fn test_from_pem() {
        assert!(KeyPair::from_pem(test_keys::ACCESS_PRIVATE, test_keys::ACCESS_PUBLIC).is_ok());
    }

    #[test]
    fn test_from_base64_pem() {
        let priv_b64 = STANDARD.encode(test_keys::ACCESS_PRIVATE);
        let pub_b64 = STANDARD.encode(test_keys::ACCESS_PUBLIC);
        assert!(KeyPair::from_base64_pem(&priv_b64, &pub_b64).is_ok());
    }

    #[test]
    fn test_bad_base64_is_key_load_error() {
        let err = KeyPair::from_base64_pem("%%%", "%%%").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::KeyLoadError { .. })
        ));
    }

    #[test]
    fn test_garbage_pem_is_key_load_error() {
        let err = KeyPair::from_pem("not a pem", "not a pem").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::KeyLoadError { .. })
        ));
    }
}
