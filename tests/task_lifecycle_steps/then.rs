//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use todolist::task::domain::TaskFilter;

#[then(r#"the open task list contains only "{name}""#)]
fn open_list_contains_only(world: &TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let page = run_async(world.service.get_tasks(&TaskFilter::new()))?;
    let names: Vec<&str> = page.items.iter().map(|item| item.name.as_str()).collect();
    if names != [name.as_str()] || page.total != 1 {
        return Err(eyre::eyre!("expected only {name:?} open, found {names:?}"));
    }
    Ok(())
}

#[then(r#"today's completed tasks are "{name}""#)]
fn completed_tasks_are(world: &TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let completed = run_async(world.service.get_completed_tasks())?;
    let names: Vec<&str> = completed.iter().map(|view| view.name.as_str()).collect();
    if names != [name.as_str()] {
        return Err(eyre::eyre!("expected {name:?} completed, found {names:?}"));
    }
    Ok(())
}

#[then(r#"the creation fails with "{message}""#)]
fn creation_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_create_result.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected {message:?}, got {err}")),
        Some(Ok(task)) => Err(eyre::eyre!("expected failure, created {}", task.id())),
        None => Err(eyre::eyre!("no creation attempted")),
    }
}

#[then("the creation succeeds")]
fn creation_succeeds(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_create_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err}")),
        None => Err(eyre::eyre!("no creation attempted")),
    }
}

#[then("the completed report has no rows")]
fn completed_report_is_empty(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let rows = run_async(world.service.calculate_completed_tasks())?;
    if !rows.is_empty() {
        return Err(eyre::eyre!("expected no report rows, found {}", rows.len()));
    }
    Ok(())
}
