//! Then steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, parse_status, split_titles};
use kanban::board::domain::BoardChange;
use rstest_bdd_macros::then;

#[then(r#"the "{status}" column shows "{titles}""#)]
fn column_shows(world: &ReorderWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .project()?
        .column(parse_status(&status)?)
        .into_iter()
        .map(|task| task.title().to_owned())
        .collect();
    let expected = split_titles(&titles);
    if actual != expected {
        return Err(eyre::eyre!("expected {status} column {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the board order is "{titles}""#)]
fn board_order_is(world: &ReorderWorld, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .project()?
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    let expected = split_titles(&titles);
    if actual != expected {
        return Err(eyre::eyre!("expected board order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the number of persisted moves is {expected:usize}")]
fn persisted_moves(world: &ReorderWorld, expected: usize) -> Result<(), eyre::Report> {
    let moves = world
        .gateway
        .changes()?
        .iter()
        .filter(|change| matches!(change, BoardChange::TaskMoved { .. }))
        .count();
    if moves != expected {
        return Err(eyre::eyre!("expected {expected} persisted moves, found {moves}"));
    }
    Ok(())
}
