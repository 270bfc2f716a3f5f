//! Persisted state survives a full reload into a new store.

use super::helpers::{flat_titles, gateway, seed_project, store_for};
use kanban::board::{
    adapters::memory::InMemoryProjectGateway,
    domain::{Priority, TaskStatus, TaskUpdate},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reload_restores_persisted_board(
    gateway: InMemoryProjectGateway,
) -> Result<(), eyre::Report> {
    let mut writer = store_for(&gateway);
    let (project_id, ids) = seed_project(
        &mut writer,
        &[("A", TaskStatus::Todo), ("B", TaskStatus::Todo)],
    )?;
    let a = *ids.first().ok_or_else(|| eyre::eyre!("missing A"))?;
    writer.update_task(
        project_id,
        a,
        &TaskUpdate::new().with_priority(Priority::LOWEST),
    );
    writer.move_task(project_id, a, TaskStatus::Todo, 5);
    writer.flush().await;

    let mut reader = store_for(&gateway);
    reader.fetch_all().await;

    let project = reader
        .project(project_id)
        .ok_or_else(|| eyre::eyre!("project not reloaded"))?;
    assert_eq!(flat_titles(project), vec!["B", "A"]);
    assert_eq!(
        project.task(a).map(|task| task.priority()),
        Some(Priority::LOWEST)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribers_see_each_mutation(gateway: InMemoryProjectGateway) {
    let mut store = store_for(&gateway);
    let mut receiver = store.subscribe();

    let project_id = store.create_project("watched", "");
    assert!(receiver.has_changed().expect("sender alive"));
    let first = *receiver.borrow_and_update();

    store.update_project(project_id, "watched", "again");
    let second = *receiver.borrow_and_update();

    assert!(second > first);
}
