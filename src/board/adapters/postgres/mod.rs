//! `PostgreSQL` adapter storing projects and tasks as separate rows.

mod models;
mod repository;
mod schema;

pub use repository::{BoardPgPool, PostgresProjectGateway};
