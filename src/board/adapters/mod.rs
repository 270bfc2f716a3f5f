//! Adapter implementations for board persistence ports.

pub mod document;
pub mod local;
pub mod memory;
pub mod postgres;
