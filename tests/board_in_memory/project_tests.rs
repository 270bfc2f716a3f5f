//! Project lifecycle through the store.

use super::helpers::{TestStore, gateway, seed_project, store_for};
use kanban::board::{
    adapters::memory::InMemoryProjectGateway,
    domain::{BoardChange, TaskStatus},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projects_append_in_creation_order(gateway: InMemoryProjectGateway) {
    let mut store: TestStore = store_for(&gateway);

    let first = store.create_project("Alpha", "");
    let second = store.create_project("Beta", "second");
    store.flush().await;

    let ids: Vec<_> = store.projects().iter().map(|project| project.id()).collect();
    assert_eq!(ids, vec![first, second]);
    let changes = gateway.changes().expect("change log readable");
    assert!(matches!(
        changes.as_slice(),
        [BoardChange::ProjectCreated(_), BoardChange::ProjectCreated(_)]
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_project_leaves_no_reachable_tasks(
    gateway: InMemoryProjectGateway,
) -> Result<(), eyre::Report> {
    let mut store = store_for(&gateway);
    let (project_id, task_ids) = seed_project(
        &mut store,
        &[("a", TaskStatus::Todo), ("b", TaskStatus::Done)],
    )?;

    eyre::ensure!(store.delete_project(project_id), "project should be deleted");
    store.flush().await;

    for task_id in task_ids {
        eyre::ensure!(
            store
                .projects()
                .iter()
                .all(|project| project.task(task_id).is_none()),
            "task {task_id} still reachable"
        );
    }
    let stored = gateway.stored()?;
    eyre::ensure!(stored.projects.is_empty(), "gateway still holds the project");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_unknown_project_is_a_noop(gateway: InMemoryProjectGateway) {
    let mut store = store_for(&gateway);
    let kept = store.create_project("kept", "");
    store.delete_project(kept);

    assert!(!store.delete_project(kept));
    store.flush().await;

    assert_eq!(gateway.changes().expect("change log readable").len(), 2);
}
