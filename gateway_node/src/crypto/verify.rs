//! Generic public-key signature verification.
//!
//! Fixed, non-configurable policy: ECDSA over secp256k1 with a SHA-256
//! message digest, DER signature encoded base64, SEC1 public key encoded
//! hex. A mismatched key resolves to `false`; malformed key or signature
//! material surfaces as a wrapped error carrying the original cause.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use k256::ecdsa::signature::Verifier;
use k256::ecdsa::{Signature, VerifyingKey};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("verification failed: {0}")]
    Verification(String),
}

/// Verify `signature` (base64 DER) over `message` against `public_key`
/// (hex SEC1, compressed or uncompressed).
pub fn verify_message_signature(
    message: &str,
    signature: &str,
    public_key: &str,
) -> Result<bool, VerifyError> {
    let key_hex = public_key.strip_prefix("0x").unwrap_or(public_key);
    let key_bytes = hex::decode(key_hex)
        .map_err(|e| VerifyError::Verification(format!("invalid public key hex: {}", e)))?;
    let verifying_key = VerifyingKey::from_sec1_bytes(&key_bytes)
        .map_err(|e| VerifyError::Verification(format!("invalid public key: {}", e)))?;

    let signature_bytes = BASE64
        .decode(signature)
        .map_err(|e| VerifyError::Verification(format!("invalid signature base64: {}", e)))?;
    let signature = Signature::from_der(&signature_bytes)
        .map_err(|e| VerifyError::Verification(format!("invalid signature encoding: {}", e)))?;

    Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
}
