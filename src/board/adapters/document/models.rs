//! Wire models for the single-document backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::board::domain::{
    PersistedProjectData, PersistedTaskData, Preferences, Priority, Project, ProjectId, Snapshot,
    Task, TaskId, TaskStatus,
};

/// Response envelope returned by `GET`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct DocumentEnvelope {
    #[serde(default)]
    pub record: Option<DocumentRecord>,
}

/// The stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Every project.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<DocumentProject>,
    /// Mirrored display preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

/// Reads an explicit `null` list as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProject {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Project description.
    #[serde(default)]
    pub description: String,
    /// Tasks in flat order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<DocumentTask>,
    /// Creation time in epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTask {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Status column.
    pub status: TaskStatus,
    /// Raw priority; missing or out-of-range values read as the default.
    #[serde(default)]
    pub priority: Option<i64>,
    /// Creation time in epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for DocumentTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            priority: Some(i64::from(task.priority())),
            created_at: task.created_at(),
        }
    }
}

impl From<DocumentTask> for Task {
    fn from(task: DocumentTask) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: Priority::or_default(task.priority),
            created_at: task.created_at,
        })
    }
}

impl From<&Project> for DocumentProject {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            tasks: project.tasks().iter().map(DocumentTask::from).collect(),
            created_at: project.created_at(),
        }
    }
}

impl From<DocumentProject> for Project {
    fn from(project: DocumentProject) -> Self {
        Self::from_persisted(PersistedProjectData {
            id: project.id,
            name: project.name,
            description: project.description,
            tasks: project.tasks.into_iter().map(Task::from).collect(),
            created_at: project.created_at,
        })
    }
}

impl From<&Snapshot> for DocumentRecord {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            projects: snapshot.projects.iter().map(DocumentProject::from).collect(),
            preferences: snapshot.preferences,
        }
    }
}

impl From<DocumentRecord> for Snapshot {
    fn from(record: DocumentRecord) -> Self {
        Self {
            projects: record.projects.into_iter().map(Project::from).collect(),
            preferences: record.preferences,
        }
    }
}
