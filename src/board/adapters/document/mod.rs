//! Single-document HTTP gateway.
//!
//! The whole board lives in one JSON resource: `GET` returns it wrapped in a
//! `record` envelope and `PUT` replaces it.

mod gateway;
mod models;

pub use gateway::{ACCESS_KEY_HEADER, DocumentGatewaySettings, DocumentProjectGateway};
pub use models::{DocumentProject, DocumentRecord, DocumentTask};
