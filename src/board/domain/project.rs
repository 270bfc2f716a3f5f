//! Project aggregate owning an ordered task sequence.

use super::{ProjectId, Task, TaskId, TaskStatus, TaskUpdate, reorder};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Result of asking a project to move one of its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The flat sequence or the task status changed.
    Moved,
    /// The move resolved to the existing arrangement.
    Unchanged,
    /// No task with the identifier belongs to the project.
    TaskNotFound,
}

/// Number of tasks in each status column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnCounts {
    /// Tasks in the `todo` column.
    pub todo: usize,
    /// Tasks in the `in-progress` column.
    pub in_progress: usize,
    /// Tasks in the `done` column.
    pub done: usize,
}

impl ColumnCounts {
    /// Returns the count for one column.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

/// Named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted tasks in flat order.
    pub tasks: Vec<Task>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: description.into(),
            tasks: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            tasks: data.tasks,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the flat task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the tasks of one column in display order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .collect()
    }

    /// Returns the zero-based rank of a task inside its column.
    #[must_use]
    pub fn column_rank(&self, task_id: TaskId) -> Option<usize> {
        let status = self.task(task_id)?.status();
        self.column(status)
            .iter()
            .position(|task| task.id() == task_id)
    }

    /// Returns the number of tasks per column.
    #[must_use]
    pub fn column_counts(&self) -> ColumnCounts {
        self.tasks
            .iter()
            .fold(ColumnCounts::default(), |mut counts, task| {
                match task.status() {
                    TaskStatus::Todo => counts.todo += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Done => counts.done += 1,
                }
                counts
            })
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Replaces name and description.
    pub fn rename(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.name = name.into();
        self.description = description.into();
    }

    /// Appends a task to the end of the flat sequence.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Merges `update` into a task and returns the updated task.
    pub fn update_task(&mut self, task_id: TaskId, update: &TaskUpdate) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id() == task_id)?;
        task.apply(update);
        Some(task)
    }

    /// Removes a task and returns it.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(position))
    }

    /// Moves a task to `new_index` of the `new_status` column.
    ///
    /// See [`reorder`] for the placement rule.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        new_status: TaskStatus,
        new_index: usize,
    ) -> MoveOutcome {
        let Some(reordered) = reorder(&self.tasks, task_id, new_status, new_index) else {
            return MoveOutcome::TaskNotFound;
        };
        if reordered == self.tasks {
            return MoveOutcome::Unchanged;
        }
        self.tasks = reordered;
        MoveOutcome::Moved
    }
}
