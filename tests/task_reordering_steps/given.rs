//! Given steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_status, run_async, split_titles};
use kanban::board::domain::NewTask;
use rstest_bdd_macros::given;

#[given(r#"a project with tasks "{tasks}""#)]
fn project_with_tasks(world: &mut ReorderWorld, tasks: String) -> Result<(), eyre::Report> {
    let project_id = world.store.create_project("Scenario board", "");
    for entry in split_titles(&tasks) {
        let (title, status) = entry
            .split_once(':')
            .ok_or_else(|| eyre::eyre!("expected title:status, got {entry}"))?;
        world
            .store
            .create_task(project_id, NewTask::new(title, parse_status(status)?))
            .ok_or_else(|| eyre::eyre!("project vanished while seeding"))?;
    }
    run_async(world.store.flush());
    world.project_id = Some(project_id);
    Ok(())
}
