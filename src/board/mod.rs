//! Kanban board state management.
//!
//! Projects own an ordered, flat sequence of tasks; each task sits in one of
//! three status columns and the per-column order is derived by filtering the
//! flat sequence. The module follows hexagonal architecture:
//!
//! - Domain types and the reorder algorithm in [`domain`]
//! - Port contracts for remote persistence and local preferences in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The application state store in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
