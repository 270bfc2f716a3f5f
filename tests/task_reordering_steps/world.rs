//! Shared world state for task reordering BDD scenarios.

use std::sync::Arc;

use kanban::board::{
    adapters::memory::{InMemoryPreferenceStore, InMemoryProjectGateway},
    domain::{Project, ProjectId, TaskId, TaskStatus},
    services::BoardStore,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for reordering behaviour tests.
pub struct ReorderWorld {
    pub store: BoardStore<DefaultClock>,
    pub gateway: InMemoryProjectGateway,
    pub project_id: Option<ProjectId>,
}

impl ReorderWorld {
    /// Creates a world backed by an in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        let gateway = InMemoryProjectGateway::new();
        let store = BoardStore::new(
            Arc::new(gateway.clone()),
            Arc::new(InMemoryPreferenceStore::new()),
            Arc::new(DefaultClock),
        );
        Self {
            store,
            gateway,
            project_id: None,
        }
    }

    /// Returns the scenario project.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        let id = self
            .project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
        self.store
            .project(id)
            .ok_or_else(|| eyre::eyre!("project {id} not in store"))
    }

    /// Finds a task by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.project()?
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title}"))
    }
}

impl Default for ReorderWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReorderWorld {
    ReorderWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a status name used in feature files.
pub fn parse_status(name: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(name).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Splits a comma-separated title list.
pub fn split_titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
