mod seed;
mod task;

pub use seed::seed_tasks;
pub use task::{Difficulty, Task, TaskChanges, TaskStatus};
