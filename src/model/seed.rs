use chrono::NaiveDate;

use super::task::{Difficulty, Task, TaskStatus};

/// 生成会话启动时的初始任务集
///
/// 创建 / 编辑日期统一盖会话启动日的章。
pub fn seed_tasks(today: NaiveDate) -> Vec<Task> {
    let due = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");

    vec![
        Task::new("Learn HTML", today)
            .with_description("Take an HTML course")
            .with_due_date(due(2025, 12, 31)),
        Task::new("Learn CSS", today)
            .with_description("Take a CSS course")
            .with_status(TaskStatus::InProgress)
            .with_difficulty(Difficulty::Medium)
            .with_due_date(due(2025, 11, 15)),
        Task::new("Learn JS", today)
            .with_description("Take a JS course")
            .with_difficulty(Difficulty::Hard)
            .with_due_date(due(2025, 12, 1)),
        Task::new("Learn React", today)
            .with_description("Take a React course")
            .with_status(TaskStatus::Done)
            .with_difficulty(Difficulty::Hard)
            .with_due_date(due(2025, 10, 10)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_set_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let tasks = seed_tasks(today);

        assert_eq!(tasks.len(), 4);
        assert!(tasks.iter().all(|t| t.created_on == today));
        assert!(tasks.iter().all(|t| t.due_date.is_some()));
        assert_eq!(tasks[0].title, "Learn HTML");
        assert_eq!(tasks[1].status, TaskStatus::InProgress);
        assert_eq!(tasks[3].difficulty, Difficulty::Hard);
    }
}
