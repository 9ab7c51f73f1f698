//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::task::{domain::Priority, services::CreateTaskRequest};

#[given(r#"a task "{name}" with priority "{priority}""#)]
fn existing_task(
    world: &mut TaskLifecycleWorld,
    name: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let priority = Priority::try_from(priority.as_str())?;
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(name.clone(), priority)),
    )
    .wrap_err("create task for lifecycle scenario")?;
    world.tasks.insert(name, created);
    Ok(())
}

#[given(r#"the task "{name}" has been ended"#)]
fn task_already_ended(world: &mut TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.task_named(&name)?.id();
    let ended = run_async(world.service.end_task(id)).wrap_err("end task in scenario setup")?;
    world.tasks.insert(name, ended);
    Ok(())
}

#[given("the day has ended")]
fn day_has_ended(world: &mut TaskLifecycleWorld) {
    world.clock.advance(Duration::days(1));
}
