//! FuelGate node library
//!
//! A thin HTTP gateway that forwards requests to the Fuel network GraphQL
//! API and to Ethereum mainnet JSON-RPC, and verifies chain signatures.
//! Every route maps to exactly one upstream call; responses are passed
//! through to the caller unchanged.

pub mod api;
pub mod crypto;
pub mod eth;
pub mod fuel;
