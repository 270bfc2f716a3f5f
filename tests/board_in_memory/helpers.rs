//! Shared test helpers for in-memory board integration tests.

use kanban::board::{
    adapters::memory::{InMemoryPreferenceStore, InMemoryProjectGateway},
    domain::{NewTask, Project, ProjectId, Task, TaskId, TaskStatus},
    services::BoardStore,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Store type used across integration tests.
pub type TestStore = BoardStore<DefaultClock>;

/// Provides a fresh gateway for each test.
#[fixture]
pub fn gateway() -> InMemoryProjectGateway {
    InMemoryProjectGateway::new()
}

/// Builds a store persisting into `gateway`.
pub fn store_for(gateway: &InMemoryProjectGateway) -> TestStore {
    BoardStore::new(
        Arc::new(gateway.clone()),
        Arc::new(InMemoryPreferenceStore::new()),
        Arc::new(DefaultClock),
    )
}

/// Creates a project holding the given `(title, status)` tasks in order.
///
/// # Errors
///
/// Returns an error if the project disappears while tasks are added.
pub fn seed_project(
    store: &mut TestStore,
    tasks: &[(&str, TaskStatus)],
) -> Result<(ProjectId, Vec<TaskId>), eyre::Report> {
    let project_id = store.create_project("Board", "seeded for tests");
    let mut ids = Vec::with_capacity(tasks.len());
    for (title, status) in tasks {
        let task_id = store
            .create_task(project_id, NewTask::new(*title, *status))
            .ok_or_else(|| eyre::eyre!("project vanished while seeding"))?;
        ids.push(task_id);
    }
    Ok((project_id, ids))
}

/// Returns the titles of one column in display order.
pub fn column_titles(project: &Project, status: TaskStatus) -> Vec<String> {
    project
        .column(status)
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect()
}

/// Returns the flat task order of a project.
pub fn flat_titles(project: &Project) -> Vec<String> {
    project
        .tasks()
        .iter()
        .map(Task::title)
        .map(str::to_owned)
        .collect()
}
