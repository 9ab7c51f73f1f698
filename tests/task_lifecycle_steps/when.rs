//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todolist::task::{domain::Priority, services::CreateTaskRequest};

#[when(r#"the task "{name}" is ended"#)]
fn end_task(world: &mut TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_named(&name)?.id();
    let ended = run_async(world.service.end_task(id)).wrap_err("end task")?;
    world.tasks.insert(name, ended);
    Ok(())
}

#[when(r#"a task "{name}" is created with priority "{priority}""#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    name: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let priority = Priority::try_from(priority.as_str())?;
    let result = run_async(world.service.create(CreateTaskRequest::new(name, priority)));
    world.last_create_result = Some(result);
    Ok(())
}
