//! Route dispatcher: maps each HTTP route to exactly one adapter or
//! verifier call.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{eth, fuel, signature};
use crate::eth::EthClient;
use crate::fuel::FuelClient;

/// Shared application state: one client handle per backend. Both are
/// internally reference-counted, so cloning per request is cheap and no
/// mutable state is shared between concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub fuel: FuelClient,
    pub eth: EthClient,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the gateway router with every supported route wired to its
/// single upstream call.
pub fn create_gateway_router(state: AppState) -> Router {
    let eth_routes = Router::new()
        .route("/balance", get(eth::get_balance))
        .route("/verify-signature", post(eth::verify_signature))
        .route("/transaction", get(eth::get_transaction))
        .route(
            "/transaction-confirmations",
            get(eth::get_transaction_confirmations),
        );

    Router::new()
        .route("/health", get(health))
        .route("/chain-name", get(fuel::chain_name))
        .route("/get-balance", post(fuel::get_balance))
        .route("/list-balances", post(fuel::list_balances))
        .route("/list-messages", post(fuel::list_messages))
        .route("/list-transactions", post(fuel::list_transactions))
        .route(
            "/list-contract-balances",
            post(fuel::list_contract_balances),
        )
        .route(
            "/list-latest-transactions",
            get(fuel::list_latest_transactions),
        )
        .route("/submit-transaction", post(fuel::submit_transaction))
        .route("/verify-signature", post(signature::verify_signature))
        .nest("/eth", eth_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
