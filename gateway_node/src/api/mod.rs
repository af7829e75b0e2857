//! HTTP API surface of the gateway.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod validation;

pub use errors::{ApiError, ApiResult};
pub use routes::{create_gateway_router, AppState};
