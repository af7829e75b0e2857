//! Handlers for the Ethereum-facing routes. Query-string lookups for the
//! GET routes, JSON body for signature verification.

use axum::{
    extract::{Query, State},
    Json,
};
use ethers::types::{Address, Signature, H256};
use ethers::utils::format_ether;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::routes::AppState;
use crate::api::validation::{
    require, validate_eth_address, validate_eth_signature, validate_tx_hash,
};
use crate::eth::verify_personal_message;

#[derive(Debug, Deserialize)]
pub struct BalanceParams {
    pub address: Option<String>,
    pub unit: Option<String>,
}

/// GET /eth/balance?address=0x...&unit=wei|ether
pub async fn get_balance(
    State(state): State<AppState>,
    Query(params): Query<BalanceParams>,
) -> Result<Json<Value>, ApiError> {
    let address = require(&params.address, "address")?;
    validate_eth_address(address)?;
    let unit = params.unit.as_deref().unwrap_or("wei");

    let parsed: Address = address
        .parse()
        .map_err(|_| ApiError::bad_request("address must be a valid Ethereum address"))?;

    let balance = state.eth.balance(parsed).await?;
    let formatted = if unit == "ether" {
        format_ether(balance)
    } else {
        balance.to_string()
    };

    Ok(Json(json!({
        "address": address,
        "balance": formatted,
        "unit": unit,
    })))
}

#[derive(Debug, Deserialize)]
pub struct VerifyMessageRequest {
    pub address: Option<String>,
    pub message: Option<String>,
    pub signature: Option<String>,
}

/// POST /eth/verify-signature — EIP-191 personal message check, local
/// recovery only.
pub async fn verify_signature(
    Json(req): Json<VerifyMessageRequest>,
) -> Result<Json<Value>, ApiError> {
    let address = require(&req.address, "address")?;
    let message = require(&req.message, "message")?;
    let signature = require(&req.signature, "signature")?;
    validate_eth_address(address)?;
    validate_eth_signature(signature)?;

    let parsed_address: Address = address
        .parse()
        .map_err(|_| ApiError::bad_request("address must be a valid Ethereum address"))?;
    let parsed_signature: Signature = signature
        .parse()
        .map_err(|_| ApiError::bad_request("signature must be a 65-byte hex string"))?;

    let valid = verify_personal_message(parsed_address, message, &parsed_signature);
    Ok(Json(json!({ "valid": valid })))
}

#[derive(Debug, Deserialize)]
pub struct TransactionParams {
    pub hash: Option<String>,
}

/// GET /eth/transaction?hash=0x...
pub async fn get_transaction(
    State(state): State<AppState>,
    Query(params): Query<TransactionParams>,
) -> Result<Json<Value>, ApiError> {
    let hash = require(&params.hash, "hash")?;
    validate_tx_hash(hash)?;

    let parsed: H256 = hash
        .parse()
        .map_err(|_| ApiError::bad_request("hash must be a valid transaction hash"))?;

    let transaction = state.eth.transaction(parsed).await?;
    Ok(Json(json!({ "transaction": transaction })))
}

/// GET /eth/transaction-confirmations?hash=0x...
pub async fn get_transaction_confirmations(
    State(state): State<AppState>,
    Query(params): Query<TransactionParams>,
) -> Result<Json<Value>, ApiError> {
    let hash = require(&params.hash, "hash")?;
    validate_tx_hash(hash)?;

    let parsed: H256 = hash
        .parse()
        .map_err(|_| ApiError::bad_request("hash must be a valid transaction hash"))?;

    let confirmations = state.eth.transaction_confirmations(parsed).await?;
    Ok(Json(json!({
        "hash": hash,
        "confirmations": confirmations,
    })))
}
