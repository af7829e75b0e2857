//! Signature verification.
//!
//! Two independent capabilities: Fuel chain-signature verification used
//! by the `/verify-signature` route, and a standalone generic public-key
//! verification helper with no route of its own.

pub mod fuel_signature;
pub mod verify;

pub use fuel_signature::{verify_fuel_signature, FuelSignatureError, FUEL_SIGNATURE_TAG};
pub use verify::{verify_message_signature, VerifyError};
