//! Fuel GraphQL client adapter.
//!
//! Each operation issues exactly one HTTP POST against the fixed Fuel
//! GraphQL endpoint and returns the decoded response envelope. No
//! retries, no caching, no timeout wiring beyond what the underlying
//! HTTP client does implicitly.

pub mod queries;
pub mod types;

use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::json;

use self::queries::QueryDescriptor;
use self::types::{
    BalanceData, BalancesData, ChainData, ContractBalancesData, GraphQlEnvelope,
    LatestTransactionsData, MessagesData, OwnerTransactionsData, SubmitData,
};

/// Fuel mainnet GraphQL endpoint.
pub const FUEL_GRAPHQL_ENDPOINT: &str = "https://mainnet.fuel.network/v1/graphql";

/// Normalized upstream failure. Transport covers network-level errors and
/// non-2xx responses; everything else (including a response body this
/// gateway cannot decode) is unexpected.
#[derive(Debug, thiserror::Error)]
pub enum FuelClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Client for the Fuel GraphQL backend. Cheap to clone; the inner
/// `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct FuelClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FuelClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client against the fixed mainnet endpoint.
    pub fn mainnet() -> Self {
        Self::new(FUEL_GRAPHQL_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post one query descriptor and decode the envelope. All operations
    /// funnel through here so error shaping lives in one place.
    async fn execute<T: DeserializeOwned>(
        &self,
        descriptor: QueryDescriptor<'_>,
    ) -> Result<GraphQlEnvelope<T>, FuelClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .json(&descriptor)
            .send()
            .await
            .map_err(|e| FuelClientError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| FuelClientError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FuelClientError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FuelClientError::Unexpected(e.to_string()))
    }

    /// Balance of one asset held by an address.
    pub async fn asset_balance(
        &self,
        address: &str,
        asset_id: &str,
    ) -> Result<GraphQlEnvelope<BalanceData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::BALANCE,
            json!({ "address": address, "assetId": asset_id }),
        ))
        .await
    }

    /// First five asset balances held by an owner.
    pub async fn asset_balances(
        &self,
        owner: &str,
    ) -> Result<GraphQlEnvelope<BalancesData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::BALANCES,
            json!({ "filter": { "owner": owner } }),
        ))
        .await
    }

    /// Name of the chain the backend serves.
    pub async fn chain_name(&self) -> Result<GraphQlEnvelope<ChainData>, FuelClientError> {
        self.execute(QueryDescriptor::new(queries::CHAIN_NAME)).await
    }

    /// First five bridged messages owned by an address.
    pub async fn messages(
        &self,
        address: &str,
    ) -> Result<GraphQlEnvelope<MessagesData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::MESSAGES,
            json!({ "address": address }),
        ))
        .await
    }

    /// First five transactions owned by an address.
    pub async fn transactions_by_owner(
        &self,
        address: &str,
    ) -> Result<GraphQlEnvelope<OwnerTransactionsData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::OWNER_TRANSACTIONS,
            json!({ "address": address }),
        ))
        .await
    }

    /// First five asset balances held by a contract.
    pub async fn contract_balances(
        &self,
        contract: &str,
    ) -> Result<GraphQlEnvelope<ContractBalancesData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::CONTRACT_BALANCES,
            json!({ "filter": { "contract": contract } }),
        ))
        .await
    }

    /// Last five transactions on the chain.
    pub async fn latest_transactions(
        &self,
    ) -> Result<GraphQlEnvelope<LatestTransactionsData>, FuelClientError> {
        self.execute(QueryDescriptor::new(queries::LATEST_TRANSACTIONS))
            .await
    }

    /// Submit a hex-encoded transaction; returns its id.
    pub async fn submit_transaction(
        &self,
        encoded_transaction: &str,
    ) -> Result<GraphQlEnvelope<SubmitData>, FuelClientError> {
        self.execute(QueryDescriptor::with_variables(
            queries::SUBMIT,
            json!({ "encodedTransaction": encoded_transaction }),
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_omits_absent_variables() {
        let descriptor = QueryDescriptor::new(queries::CHAIN_NAME);
        let body = serde_json::to_value(&descriptor).unwrap();
        assert!(body.get("variables").is_none());
        assert!(body.get("query").is_some());
    }

    #[test]
    fn descriptor_carries_only_required_variables() {
        let descriptor = QueryDescriptor::with_variables(
            queries::BALANCE,
            json!({ "address": "0xaa", "assetId": "0x00" }),
        );
        let body = serde_json::to_value(&descriptor).unwrap();
        let variables = body.get("variables").unwrap();
        assert_eq!(variables.as_object().unwrap().len(), 2);
    }
}
