//! Route handlers, one module per upstream collaborator.

pub mod eth;
pub mod fuel;
pub mod signature;
