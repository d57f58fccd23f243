//! Folio core: entity models, the schema validation layer and the API
//! contract shared by the server and the client.
//!
//! Nothing in this crate touches the database or the network.

pub mod contract;
pub mod error;
pub mod models;
pub mod schema;
pub mod types;
