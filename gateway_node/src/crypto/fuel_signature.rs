//! Fuel chain-signature verification.
//!
//! A Fuel signature is 64 bytes compact with the recovery bit stored in
//! the most significant bit of byte 32. The message hash is SHA-256 over
//! the UTF-8 statement, and a Fuel address is SHA-256 over the 64-byte
//! uncompressed public key. Addresses are compared as lowercase
//! 0x-prefixed hex.

use anyhow::{anyhow, bail, Result};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha2::{Digest, Sha256};

/// Header tag this verifier accepts.
pub const FUEL_SIGNATURE_TAG: &str = "fuel-v1";

/// All internal failures collapse to this one error; the cause is logged
/// at the boundary and never exposed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FuelSignatureError {
    #[error("fuel signature verification failed")]
    VerificationFailed,
}

/// Verify a signed statement against the address that claims to have
/// signed it. Returns `Ok(true)` iff the recovered signer address equals
/// the normalized supplied address.
pub fn verify_fuel_signature(
    header_tag: &str,
    address: &str,
    statement: &str,
    signature: &str,
) -> Result<bool, FuelSignatureError> {
    match verify_inner(header_tag, address, statement, signature) {
        Ok(matched) => Ok(matched),
        Err(cause) => {
            log::warn!("fuel signature verification error: {}", cause);
            Err(FuelSignatureError::VerificationFailed)
        }
    }
}

fn verify_inner(header_tag: &str, address: &str, statement: &str, signature: &str) -> Result<bool> {
    if header_tag != FUEL_SIGNATURE_TAG {
        bail!("invalid header type: {}", header_tag);
    }
    if address.is_empty() {
        bail!("signer address is empty");
    }

    let expected = normalize_address(address)?;

    let digest = Sha256::digest(statement.as_bytes());
    let (signature, recovery_id) = split_compact_signature(signature)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
        .map_err(|e| anyhow!("signature recovery failed: {}", e))?;

    Ok(fuel_address_of(&recovered_key) == expected)
}

/// Canonical comparison form: 32-byte address as lowercase 0x-prefixed hex.
fn normalize_address(address: &str) -> Result<String> {
    let stripped = address.strip_prefix("0x").unwrap_or(address);
    let bytes = hex::decode(stripped).map_err(|e| anyhow!("invalid address hex: {}", e))?;
    if bytes.len() != 32 {
        bail!("address must be 32 bytes, got {}", bytes.len());
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Split a 64-byte compact signature into an (r, s) signature and the
/// recovery id carried in the top bit of the s component.
fn split_compact_signature(signature: &str) -> Result<(Signature, RecoveryId)> {
    let stripped = signature.strip_prefix("0x").unwrap_or(signature);
    let bytes = hex::decode(stripped).map_err(|e| anyhow!("invalid signature hex: {}", e))?;
    if bytes.len() != 64 {
        bail!("compact signature must be 64 bytes, got {}", bytes.len());
    }

    let recovery_bit = (bytes[32] & 0x80) >> 7;
    let mut normalized = [0u8; 64];
    normalized.copy_from_slice(&bytes);
    normalized[32] &= 0x7f;

    let signature = Signature::from_slice(&normalized)
        .map_err(|e| anyhow!("invalid signature components: {}", e))?;
    let recovery_id =
        RecoveryId::try_from(recovery_bit).map_err(|e| anyhow!("invalid recovery id: {}", e))?;

    Ok((signature, recovery_id))
}

/// Fuel address of a public key: SHA-256 over the 64-byte uncompressed
/// point (the 0x04 prefix byte is skipped).
fn fuel_address_of(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let digest = Sha256::digest(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;

    fn signed_statement(statement: &str) -> (String, String) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let digest = Sha256::digest(statement.as_bytes());
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(digest.as_slice())
            .unwrap();

        let mut compact: [u8; 64] = signature.to_bytes().into();
        compact[32] |= recovery_id.to_byte() << 7;

        let address = fuel_address_of(signing_key.verifying_key());
        (address, format!("0x{}", hex::encode(compact)))
    }

    #[test]
    fn matching_key_verifies() {
        let statement = "sign in to the gateway";
        let (address, signature) = signed_statement(statement);

        let matched =
            verify_fuel_signature(FUEL_SIGNATURE_TAG, &address, statement, &signature).unwrap();
        assert!(matched);
    }

    #[test]
    fn mismatched_address_returns_false() {
        let statement = "sign in to the gateway";
        let (_, signature) = signed_statement(statement);
        let (other_address, _) = signed_statement("another statement");

        let matched =
            verify_fuel_signature(FUEL_SIGNATURE_TAG, &other_address, statement, &signature)
                .unwrap();
        assert!(!matched);
    }

    #[test]
    fn uppercase_address_is_normalized() {
        let statement = "case insensitive address";
        let (address, signature) = signed_statement(statement);
        let shouting = format!("0x{}", address[2..].to_uppercase());

        let matched =
            verify_fuel_signature(FUEL_SIGNATURE_TAG, &shouting, statement, &signature).unwrap();
        assert!(matched);
    }

    #[test]
    fn wrong_header_tag_is_an_error() {
        let (address, signature) = signed_statement("statement");
        let result = verify_fuel_signature("fuel-v2", &address, "statement", &signature);
        assert!(matches!(result, Err(FuelSignatureError::VerificationFailed)));
    }

    #[test]
    fn empty_address_is_an_error() {
        let (_, signature) = signed_statement("statement");
        let result = verify_fuel_signature(FUEL_SIGNATURE_TAG, "", "statement", &signature);
        assert!(matches!(result, Err(FuelSignatureError::VerificationFailed)));
    }

    #[test]
    fn malformed_signature_is_an_error() {
        let (address, _) = signed_statement("statement");
        let result = verify_fuel_signature(FUEL_SIGNATURE_TAG, &address, "statement", "0x1234");
        assert!(matches!(result, Err(FuelSignatureError::VerificationFailed)));
    }
}
