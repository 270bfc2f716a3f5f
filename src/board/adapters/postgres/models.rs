//! Diesel row models and their mapping onto domain values.

use super::schema::{projects, tasks};
use crate::board::{
    domain::{
        PersistedProjectData, PersistedTaskData, Priority, Project, ProjectId, Task, TaskId,
        TaskStatus,
    },
    ports::{GatewayResult, TransportError},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status column.
    pub status: String,
    /// Raw priority.
    pub priority: Option<i16>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status column.
    pub status: String,
    /// Priority.
    pub priority: Option<i16>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewProjectRow {
    /// Builds the insert row for a project.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id().into_inner(),
            name: project.name().to_owned(),
            description: Some(project.description().to_owned()),
            created_at: project.created_at(),
        }
    }
}

impl NewTaskRow {
    /// Builds the insert row for a task of `project_id`.
    #[must_use]
    pub fn from_task(project_id: ProjectId, task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            project_id: project_id.into_inner(),
            title: task.title().to_owned(),
            description: Some(task.description().to_owned()),
            status: task.status().as_str().to_owned(),
            priority: Some(i16::from(task.priority().value())),
            created_at: task.created_at(),
        }
    }
}

/// Maps a task row, defaulting a missing description to empty and a missing
/// or invalid priority to the default.
pub fn row_to_task(row: TaskRow) -> GatewayResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        priority,
        created_at,
        ..
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TransportError::decode)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description: description.unwrap_or_default(),
        status,
        priority: Priority::or_default(priority.map(i64::from)),
        created_at,
    }))
}

/// Maps a project row together with its already ordered task rows.
pub fn row_to_project(row: ProjectRow, task_rows: Vec<TaskRow>) -> GatewayResult<Project> {
    let project_tasks = task_rows
        .into_iter()
        .map(row_to_task)
        .collect::<GatewayResult<Vec<_>>>()?;

    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name: row.name,
        description: row.description.unwrap_or_default(),
        tasks: project_tasks,
        created_at: row.created_at,
    }))
}
