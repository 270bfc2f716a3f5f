//! Kanban: project and task board state management.
//!
//! This crate owns the in-memory board (projects holding tasks spread over
//! three status columns), reconciles drag-and-drop results into each
//! project's ordered task sequence, and mirrors every change to a remote
//! store without blocking the caller.
//!
//! # Architecture
//!
//! Kanban follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (relational database,
//!   JSON document service, local files, memory)
//!
//! # Modules
//!
//! - [`board`]: Domain, ports, adapters, and the state store
//! - [`config`]: Layered configuration
//! - [`bootstrap`]: Store assembly from configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod bootstrap;
pub mod config;
pub mod telemetry;
