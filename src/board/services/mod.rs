//! Application services for the kanban board.

mod store;

pub use store::BoardStore;
