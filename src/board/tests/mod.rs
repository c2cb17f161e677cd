//! Unit tests for the kanban board module.


use crate::board::domain::{NewTask, ProjectId, Task, TaskStatus};
use mockable::DefaultClock;

/// Builds a task of `project_id` holding `status`.
fn task_in(project_id: ProjectId, title: &str, status: TaskStatus) -> Task {
    let draft = NewTask::new(project_id, title)
        .expect("valid task draft")
        .with_status(status);
    Task::from_new(draft, &DefaultClock)
}
