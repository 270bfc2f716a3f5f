//! Values exchanged between the state store and persistence gateways.

use super::{Preferences, Project, ProjectId, Task, TaskId, TaskStatus};

/// Complete board state as loaded from or written to a gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// All projects with their nested tasks.
    pub projects: Vec<Project>,
    /// Display preferences, when the backend mirrors them.
    pub preferences: Option<Preferences>,
}

impl Snapshot {
    /// Returns a snapshot with no projects and no preferences.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            projects: Vec::new(),
            preferences: None,
        }
    }
}

/// The single entity touched by a store mutation.
///
/// Relational backends turn this into a row-level statement; document
/// backends ignore it and write the accompanying [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange {
    /// A project was appended.
    ProjectCreated(Project),
    /// A project's name or description changed.
    ProjectUpdated(Project),
    /// A project and all of its tasks were removed.
    ProjectDeleted(ProjectId),
    /// A task was appended to a project.
    TaskCreated {
        /// Owning project.
        project_id: ProjectId,
        /// The new task.
        task: Task,
    },
    /// Fields of a task changed.
    TaskUpdated {
        /// Owning project.
        project_id: ProjectId,
        /// The task after the update.
        task: Task,
    },
    /// A task was removed.
    TaskDeleted {
        /// Owning project.
        project_id: ProjectId,
        /// Removed task.
        task_id: TaskId,
    },
    /// A task was dragged to another slot.
    TaskMoved {
        /// Owning project.
        project_id: ProjectId,
        /// Moved task.
        task_id: TaskId,
        /// Status after the move.
        status: TaskStatus,
    },
    /// Display preferences changed.
    PreferencesChanged(Preferences),
}

impl BoardChange {
    /// Returns a short label for log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ProjectCreated(_) => "project_created",
            Self::ProjectUpdated(_) => "project_updated",
            Self::ProjectDeleted(_) => "project_deleted",
            Self::TaskCreated { .. } => "task_created",
            Self::TaskUpdated { .. } => "task_updated",
            Self::TaskDeleted { .. } => "task_deleted",
            Self::TaskMoved { .. } => "task_moved",
            Self::PreferencesChanged(_) => "preferences_changed",
        }
    }
}
