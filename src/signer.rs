//! Payload signing and verification with the cached secret key
//!
//! A signature is `base64(hex(sha256(payload ++ secret_key)))`: the digest is
//! rendered as lowercase hex first, and the hex text is what gets base64
//! encoded. Counterpart verifiers depend on this exact form.

use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::traits::CredentialStore;

/// Compute the signature of `payload` under `secret_key`
pub fn compute_signature(payload: &str, secret_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(secret_key.as_bytes());
    let digest = hasher.finalize();
    STANDARD.encode(hex::encode(digest))
}

pub struct Signer {
    credentials: Arc<dyn CredentialStore>,
}

impl Signer {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }

    /// Sign `payload` with the secret key cached at call time
    pub fn sign(&self, payload: &str) -> String {
        compute_signature(payload, &self.credentials.secret_key())
    }

    /// Check a received signature against a freshly computed one.
    /// A mismatch is logged with the access key and both signatures.
    pub fn auth(&self, signature: &str, payload: &str) -> bool {
        let credential = self.credentials.credential();
        let expected = compute_signature(payload, &credential.secret_key);
        if expected != signature {
            tracing::warn!(
                access_key = %credential.access_key,
                expected_sign = %expected,
                receive_sign = %signature,
                "Sign not equal"
            );
            return false;
        }
        true
    }
}
