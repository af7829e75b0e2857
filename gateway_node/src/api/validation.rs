//! Request validation utilities for the gateway API.
//!
//! Presence checks apply to every route; format checks apply to the
//! Ethereum-facing routes only, mirroring what each backend tolerates.

use regex::Regex;
use std::sync::LazyLock;

use crate::api::errors::ApiError;

static ETH_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static pattern"));
static TX_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("static pattern"));
static ETH_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{130}$").expect("static pattern"));

/// Require a field to be present and non-empty. Returns 400 naming the
/// field; the handler must not touch upstream when this fails.
pub fn require<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_field(field)),
    }
}

/// Validate an Ethereum address (0x + 40 hex characters).
pub fn validate_eth_address(address: &str) -> Result<(), ApiError> {
    if ETH_ADDRESS.is_match(address) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "address must be a valid Ethereum address",
        ))
    }
}

/// Validate a transaction hash (0x + 64 hex characters).
pub fn validate_tx_hash(hash: &str) -> Result<(), ApiError> {
    if TX_HASH.is_match(hash) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "hash must be a valid transaction hash",
        ))
    }
}

/// Validate a 65-byte Ethereum signature (0x + 130 hex characters).
pub fn validate_eth_signature(signature: &str) -> Result<(), ApiError> {
    if ETH_SIGNATURE.is_match(signature) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "signature must be a 65-byte hex string",
        ))
    }
}
