//! When steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_status, run_async};
use kanban::board::domain::{ColumnPosition, TaskDrop};
use rstest_bdd_macros::when;

fn source_of(world: &ReorderWorld, title: &str) -> Result<ColumnPosition, eyre::Report> {
    let task_id = world.task_id(title)?;
    let project = world.project()?;
    let status = project
        .task(task_id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task {title} missing"))?;
    let index = project
        .column_rank(task_id)
        .ok_or_else(|| eyre::eyre!("task {title} has no rank"))?;
    Ok(ColumnPosition::new(status, index))
}

#[when(r#"task "{title}" is dropped into "{status}" at position {index:usize}"#)]
fn drop_task(
    world: &mut ReorderWorld,
    title: String,
    status: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let project_id = world
        .project_id
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let task_drop = TaskDrop::new(
        world.task_id(&title)?,
        source_of(world, &title)?,
        ColumnPosition::new(parse_status(&status)?, index),
    );
    world.store.apply_drop(project_id, &task_drop);
    run_async(world.store.flush());
    Ok(())
}

#[when(r#"the drag of task "{title}" is cancelled"#)]
fn cancel_drag(world: &mut ReorderWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world
        .project_id
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let task_drop = TaskDrop::cancelled(world.task_id(&title)?, source_of(world, &title)?);
    world.store.apply_drop(project_id, &task_drop);
    run_async(world.store.flush());
    Ok(())
}
