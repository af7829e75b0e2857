//! Handler for the Fuel chain-signature verification route.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::validation::require;
use crate::crypto::verify_fuel_signature;

#[derive(Debug, Deserialize)]
pub struct SignatureHeader {
    /// Scheme tag; must be "fuel-v1".
    pub t: String,
}

#[derive(Debug, Deserialize)]
pub struct SignaturePayload {
    pub address: String,
    pub statement: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifySignatureRequest {
    pub header: Option<SignatureHeader>,
    pub payload: Option<SignaturePayload>,
    pub signature: Option<String>,
}

/// POST /verify-signature
///
/// 200 with `{"valid": true}` for a matching signature, 400 for a
/// well-formed but non-matching one and for the verifier's collapsed
/// generic failure. 500 stays reserved for unexpected internal errors.
pub async fn verify_signature(
    Json(req): Json<VerifySignatureRequest>,
) -> Result<Json<Value>, ApiError> {
    let header = req
        .header
        .as_ref()
        .ok_or_else(|| ApiError::missing_field("header"))?;
    let payload = req
        .payload
        .as_ref()
        .ok_or_else(|| ApiError::missing_field("payload"))?;
    let signature = require(&req.signature, "signature")?;

    match verify_fuel_signature(&header.t, &payload.address, &payload.statement, signature) {
        Ok(true) => Ok(Json(json!({ "valid": true }))),
        Ok(false) => Err(ApiError::bad_request("signature did not match")),
        Err(err) => Err(ApiError::bad_request(&err.to_string())),
    }
}
