//! Domain model for the kanban board.
//!
//! Everything here is free of infrastructure: identifiers, the priority
//! classifier, tasks and projects, the drag-and-drop reorder algorithm,
//! display preferences, and the snapshot/change values exchanged with
//! persistence gateways.

mod change;
mod error;
mod ids;
mod preferences;
mod priority;
mod project;
mod reorder;
mod task;

pub use change::{BoardChange, Snapshot};
pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use preferences::{AccentColor, Preferences, Theme};
pub use priority::{Priority, PriorityAppearance, PriorityColor, classify};
pub use project::{ColumnCounts, MoveOutcome, PersistedProjectData, Project};
pub use reorder::{ColumnPosition, TaskDrop, reorder};
pub use task::{NewTask, PersistedTaskData, Task, TaskStatus, TaskUpdate};
