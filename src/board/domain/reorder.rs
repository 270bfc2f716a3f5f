//! Drag-and-drop reordering over a project's flat task sequence.
//!
//! Columns are never stored separately: a column is the flat sequence
//! filtered by status. Moving a card therefore means rebuilding the flat
//! sequence so that, once filtered, the card sits at the requested rank of
//! its destination column while every other card keeps its relative order.

use super::{Task, TaskId, TaskStatus};

/// Rebuilds `tasks` with `task_id` moved to `new_index` of the
/// `new_status` column.
///
/// When `new_index` is at or past the end of the destination column the
/// task is appended to the end of the whole flat sequence, which also makes
/// it last in its column. Otherwise it is inserted immediately before the
/// card currently holding that rank.
///
/// Returns `None` when the task is not part of `tasks`.
#[must_use]
pub fn reorder(
    tasks: &[Task],
    task_id: TaskId,
    new_status: TaskStatus,
    new_index: usize,
) -> Option<Vec<Task>> {
    let moved = tasks.iter().find(|task| task.id() == task_id)?;
    let updated = moved.with_status(new_status);

    let mut remaining: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id() != task_id)
        .cloned()
        .collect();

    let anchor = remaining
        .iter()
        .filter(|task| task.status() == new_status)
        .nth(new_index)
        .map(Task::id);

    let flat_position =
        anchor.and_then(|anchor_id| remaining.iter().position(|task| task.id() == anchor_id));

    match flat_position {
        Some(position) => remaining.insert(position, updated),
        None => remaining.push(updated),
    }
    Some(remaining)
}

/// A slot in a status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnPosition {
    /// Column the slot belongs to.
    pub status: TaskStatus,
    /// Zero-based rank within the column.
    pub index: usize,
}

impl ColumnPosition {
    /// Creates a column position.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// Outcome of a drag gesture as reported by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDrop {
    /// Card being dragged.
    pub task_id: TaskId,
    /// Where the card started.
    pub source: ColumnPosition,
    /// Where the card was released; `None` when dropped outside any column.
    pub destination: Option<ColumnPosition>,
}

impl TaskDrop {
    /// Creates a drop landing on `destination`.
    #[must_use]
    pub const fn new(task_id: TaskId, source: ColumnPosition, destination: ColumnPosition) -> Self {
        Self {
            task_id,
            source,
            destination: Some(destination),
        }
    }

    /// Creates a drop released outside every column.
    #[must_use]
    pub const fn cancelled(task_id: TaskId, source: ColumnPosition) -> Self {
        Self {
            task_id,
            source,
            destination: None,
        }
    }

    /// Returns `true` when applying the drop must not change anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.destination.is_none_or(|destination| destination == self.source)
    }
}
