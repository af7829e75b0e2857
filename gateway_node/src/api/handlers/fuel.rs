//! Handlers for the Fuel-facing routes. Each handler validates field
//! presence, makes exactly one adapter call, and echoes the decoded
//! GraphQL envelope back to the caller.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::routes::AppState;
use crate::api::validation::require;
use crate::fuel::types::{
    BalanceData, BalancesData, ChainData, ContractBalancesData, GraphQlEnvelope,
    LatestTransactionsData, MessagesData, OwnerTransactionsData, SubmitData,
};

#[derive(Debug, Deserialize)]
pub struct GetBalanceRequest {
    pub address: Option<String>,
    #[serde(rename = "assetId")]
    pub asset_id: Option<String>,
}

/// POST /get-balance
pub async fn get_balance(
    State(state): State<AppState>,
    Json(req): Json<GetBalanceRequest>,
) -> Result<Json<GraphQlEnvelope<BalanceData>>, ApiError> {
    let address = require(&req.address, "address")?;
    let asset_id = require(&req.asset_id, "assetId")?;

    let envelope = state.fuel.asset_balance(address, asset_id).await?;
    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct ListBalancesRequest {
    pub owner: Option<String>,
}

/// POST /list-balances
pub async fn list_balances(
    State(state): State<AppState>,
    Json(req): Json<ListBalancesRequest>,
) -> Result<Json<GraphQlEnvelope<BalancesData>>, ApiError> {
    let owner = require(&req.owner, "owner")?;

    let envelope = state.fuel.asset_balances(owner).await?;
    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesRequest {
    pub address: Option<String>,
}

/// POST /list-messages
pub async fn list_messages(
    State(state): State<AppState>,
    Json(req): Json<ListMessagesRequest>,
) -> Result<Json<GraphQlEnvelope<MessagesData>>, ApiError> {
    let address = require(&req.address, "address")?;

    let envelope = state.fuel.messages(address).await?;
    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct ListTransactionsRequest {
    pub address: Option<String>,
}

/// POST /list-transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Json(req): Json<ListTransactionsRequest>,
) -> Result<Json<GraphQlEnvelope<OwnerTransactionsData>>, ApiError> {
    let address = require(&req.address, "address")?;

    let envelope = state.fuel.transactions_by_owner(address).await?;
    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct ListContractBalancesRequest {
    pub contract: Option<String>,
}

/// POST /list-contract-balances
pub async fn list_contract_balances(
    State(state): State<AppState>,
    Json(req): Json<ListContractBalancesRequest>,
) -> Result<Json<GraphQlEnvelope<ContractBalancesData>>, ApiError> {
    let contract = require(&req.contract, "contract")?;

    let envelope = state.fuel.contract_balances(contract).await?;
    Ok(Json(envelope))
}

/// GET /list-latest-transactions — no fields required, never reads a body.
pub async fn list_latest_transactions(
    State(state): State<AppState>,
) -> Result<Json<GraphQlEnvelope<LatestTransactionsData>>, ApiError> {
    let envelope = state.fuel.latest_transactions().await?;
    Ok(Json(envelope))
}

/// GET /chain-name
pub async fn chain_name(
    State(state): State<AppState>,
) -> Result<Json<GraphQlEnvelope<ChainData>>, ApiError> {
    let envelope = state.fuel.chain_name().await?;
    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct SubmitTransactionRequest {
    #[serde(rename = "encodedTransaction")]
    pub encoded_transaction: Option<String>,
}

/// POST /submit-transaction
pub async fn submit_transaction(
    State(state): State<AppState>,
    Json(req): Json<SubmitTransactionRequest>,
) -> Result<Json<GraphQlEnvelope<SubmitData>>, ApiError> {
    let encoded = require(&req.encoded_transaction, "encodedTransaction")?;

    let envelope = state.fuel.submit_transaction(encoded).await?;
    Ok(Json(envelope))
}
