//! Drag-and-drop scenarios driven through the store.

use super::helpers::{column_titles, flat_titles, gateway, seed_project, store_for};
use kanban::board::{
    adapters::memory::InMemoryProjectGateway,
    domain::{ColumnPosition, TaskDrop, TaskStatus},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_across_columns_partitions_tasks(
    gateway: InMemoryProjectGateway,
) -> Result<(), eyre::Report> {
    let mut store = store_for(&gateway);
    let (project_id, ids) = seed_project(
        &mut store,
        &[
            ("A", TaskStatus::Todo),
            ("B", TaskStatus::Todo),
            ("C", TaskStatus::Done),
        ],
    )?;
    let b = *ids.get(1).ok_or_else(|| eyre::eyre!("missing B"))?;

    store.move_task(project_id, b, TaskStatus::InProgress, 0);

    let project = store
        .project(project_id)
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    assert_eq!(column_titles(project, TaskStatus::Todo), vec!["A"]);
    assert_eq!(column_titles(project, TaskStatus::InProgress), vec!["B"]);
    assert_eq!(column_titles(project, TaskStatus::Done), vec!["C"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reordering_within_a_column(gateway: InMemoryProjectGateway) -> Result<(), eyre::Report> {
    let mut store = store_for(&gateway);
    let (project_id, ids) = seed_project(
        &mut store,
        &[
            ("A", TaskStatus::Todo),
            ("X", TaskStatus::Done),
            ("B", TaskStatus::Todo),
            ("C", TaskStatus::Todo),
        ],
    )?;
    let c = *ids.get(3).ok_or_else(|| eyre::eyre!("missing C"))?;

    let moved = store.apply_drop(
        project_id,
        &TaskDrop::new(
            c,
            ColumnPosition::new(TaskStatus::Todo, 2),
            ColumnPosition::new(TaskStatus::Todo, 0),
        ),
    );

    eyre::ensure!(moved, "drop should move the card");
    let project = store
        .project(project_id)
        .ok_or_else(|| eyre::eyre!("project missing"))?;
    assert_eq!(column_titles(project, TaskStatus::Todo), vec!["C", "A", "B"]);
    assert_eq!(flat_titles(project), vec!["C", "A", "X", "B"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_drop_changes_nothing(gateway: InMemoryProjectGateway) -> Result<(), eyre::Report> {
    let mut store = store_for(&gateway);
    let (project_id, ids) = seed_project(&mut store, &[("A", TaskStatus::Todo)])?;
    let a = *ids.first().ok_or_else(|| eyre::eyre!("missing A"))?;
    store.flush().await;
    let persisted = gateway.changes()?.len();

    let moved = store.apply_drop(
        project_id,
        &TaskDrop::cancelled(a, ColumnPosition::new(TaskStatus::Todo, 0)),
    );
    store.flush().await;

    eyre::ensure!(!moved, "cancelled drop must not move");
    eyre::ensure!(gateway.changes()?.len() == persisted, "nothing should persist");
    Ok(())
}
