//! Domain model for task tracking.
//!
//! The task domain models creation, completion, daily windows, listing
//! filters and display projections while keeping all infrastructure concerns
//! outside of the domain boundary.

mod day;
mod error;
mod filter;
mod ids;
mod priority;
mod task;
mod view;

pub use day::DayWindow;
pub use error::{ParsePriorityError, TaskDomainError};
pub use filter::{PageRequest, TaskFilter};
pub use ids::{TaskDescription, TaskId, TaskName};
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task};
pub use view::{
    DONE_LABEL, NOT_DONE_LABEL, TaskCompletedViewModel, TaskPage, TaskViewModel, long_date,
};
