//! End-to-end tests for the two signature-verification routes.

use anyhow::Result;
use ethers::signers::{LocalWallet, Signer};
use k256::ecdsa::SigningKey;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use fuelgate_node::api::{create_gateway_router, AppState};
use fuelgate_node::eth::EthClient;
use fuelgate_node::fuel::FuelClient;

/// Spawn the gateway with both clients pointed at dead ports; signature
/// verification never touches an upstream.
async fn spawn_gateway() -> String {
    let state = AppState {
        fuel: FuelClient::new("http://127.0.0.1:9/graphql"),
        eth: EthClient::new("http://127.0.0.1:9").unwrap(),
    };
    let app = create_gateway_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Sign a statement the Fuel way: SHA-256 message hash, compact 64-byte
/// signature with the recovery bit in the MSB of byte 32, address =
/// SHA-256 over the 64-byte public key.
fn fuel_sign(statement: &str) -> (String, String) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let digest = Sha256::digest(statement.as_bytes());
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest.as_slice())
        .unwrap();

    let mut compact: [u8; 64] = signature.to_bytes().into();
    compact[32] |= recovery_id.to_byte() << 7;

    let point = signing_key.verifying_key().to_encoded_point(false);
    let address = Sha256::digest(&point.as_bytes()[1..]);

    (
        format!("0x{}", hex::encode(address)),
        format!("0x{}", hex::encode(compact)),
    )
}

#[tokio::test]
async fn fuel_signature_roundtrip() -> Result<()> {
    let gateway = spawn_gateway().await;
    let client = reqwest::Client::new();
    let statement = "sign in to fuelgate";
    let (address, signature) = fuel_sign(statement);

    let response = client
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "header": {"t": "fuel-v1"},
            "payload": {"address": address, "statement": statement},
            "signature": signature,
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let payload: Value = response.json().await?;
    assert_eq!(payload["valid"], true);
    Ok(())
}

#[tokio::test]
async fn fuel_signature_mismatch_is_400() -> Result<()> {
    let gateway = spawn_gateway().await;
    let client = reqwest::Client::new();
    let (_, signature) = fuel_sign("statement one");
    let (other_address, _) = fuel_sign("statement two");

    let response = client
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "header": {"t": "fuel-v1"},
            "payload": {"address": other_address, "statement": "statement one"},
            "signature": signature,
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let payload: Value = response.json().await?;
    assert_eq!(payload["error"], "signature did not match");
    Ok(())
}

#[tokio::test]
async fn fuel_signature_bad_header_tag_is_400() -> Result<()> {
    let gateway = spawn_gateway().await;
    let statement = "statement";
    let (address, signature) = fuel_sign(statement);

    let response = reqwest::Client::new()
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "header": {"t": "fuel-v2"},
            "payload": {"address": address, "statement": statement},
            "signature": signature,
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let payload: Value = response.json().await?;
    assert_eq!(payload["error"], "fuel signature verification failed");
    Ok(())
}

#[tokio::test]
async fn fuel_signature_empty_address_is_400() -> Result<()> {
    let gateway = spawn_gateway().await;
    let statement = "statement";
    let (_, signature) = fuel_sign(statement);

    let response = reqwest::Client::new()
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "header": {"t": "fuel-v1"},
            "payload": {"address": "", "statement": statement},
            "signature": signature,
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let payload: Value = response.json().await?;
    assert_eq!(payload["error"], "fuel signature verification failed");
    Ok(())
}

#[tokio::test]
async fn fuel_signature_missing_fields_are_named() -> Result<()> {
    let gateway = spawn_gateway().await;
    let client = reqwest::Client::new();
    let statement = "statement";
    let (address, signature) = fuel_sign(statement);

    let response = client
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "payload": {"address": address, "statement": statement},
            "signature": signature,
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 400);
    let payload: Value = response.json().await?;
    assert_eq!(payload["error"], "header is required");

    let response = client
        .post(format!("{}/verify-signature", gateway))
        .json(&json!({
            "header": {"t": "fuel-v1"},
            "payload": {"address": address, "statement": statement},
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 400);
    let payload: Value = response.json().await?;
    assert_eq!(payload["error"], "signature is required");

    Ok(())
}

#[tokio::test]
async fn eth_personal_message_verification() -> Result<()> {
    let gateway = spawn_gateway().await;
    let client = reqwest::Client::new();

    let wallet = LocalWallet::new(&mut rand::thread_rng());
    let message = "hello from fuelgate";
    let signature = wallet.sign_message(message).await?;

    let response = client
        .post(format!("{}/eth/verify-signature", gateway))
        .json(&json!({
            "address": format!("{:?}", wallet.address()),
            "message": message,
            "signature": format!("0x{}", signature),
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let payload: Value = response.json().await?;
    assert_eq!(payload["valid"], true);

    // A different wallet did not sign this message.
    let other = LocalWallet::new(&mut rand::thread_rng());
    let response = client
        .post(format!("{}/eth/verify-signature", gateway))
        .json(&json!({
            "address": format!("{:?}", other.address()),
            "message": message,
            "signature": format!("0x{}", signature),
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let payload: Value = response.json().await?;
    assert_eq!(payload["valid"], false);
    Ok(())
}
