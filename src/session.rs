//! 会话循环：主菜单状态机
//!
//! `MainMenu -> {ViewTasks, SearchTask, AddTask, Exit}`，每个子流程
//! 一次性执行完回到主菜单，Exit 结束循环。工作序列只在这里持有，
//! 每次写操作都整体替换为 store 函数的返回值，绝不原地修改。

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::Result;
use crate::model::{Task, TaskChanges};
use crate::prompt::{self, Console};
use crate::store;
use crate::ui;

/// 一次交互会话
pub struct Session<R, W> {
    /// 工作序列（插入顺序）
    tasks: Vec<Task>,
    console: Console<R, W>,
    /// 会话日期，所有日期章都盖它
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, tasks: Vec<Task>, today: NaiveDate) -> Self {
        Self {
            tasks,
            console,
            today,
        }
    }

    /// 当前工作序列
    #[allow(dead_code)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 拆出工作序列和控制台（测试里检查输出用）
    #[allow(dead_code)]
    pub fn into_parts(self) -> (Vec<Task>, Console<R, W>) {
        (self.tasks, self.console)
    }

    /// 主循环，直到用户选择退出
    pub fn run(&mut self) -> Result<()> {
        loop {
            ui::render_main_menu(self.console.writer())?;
            let choice = self.console.prompt("Choose an option: ")?;

            match choice.trim() {
                "1" => self.view_tasks()?,
                "2" => self.search_task()?,
                "3" => self.add_task()?,
                "0" => {
                    self.console.line("Bye...")?;
                    return Ok(());
                }
                _ => self.console.line("Invalid option.")?,
            }
        }
    }

    /// ViewTasks 子流程：过滤 / 排序视图 + 可选详情 + 可选编辑
    fn view_tasks(&mut self) -> Result<()> {
        ui::render_view_menu(self.console.writer())?;
        let choice = self.console.prompt("Option: ")?;

        // 视图是工作序列的派生拷贝，存储的序列不动
        let view = self.filtered_view(choice.trim());

        if view.is_empty() {
            self.console.line("No tasks.")?;
        } else {
            for label in store::titles(&view) {
                self.console.line(label)?;
            }
        }

        let detail = self.console.prompt("View detail of a task? (number or Enter): ")?;
        let detail = detail.trim();
        if detail.is_empty() {
            return Ok(());
        }

        // 非数字或越界：静默忽略（序号以过滤后的视图为准，1 起始）
        let picked = detail
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| view.get(i));
        let Some(task) = picked else {
            return Ok(());
        };

        ui::render_task(self.console.writer(), task)?;

        let edit = self.console.prompt("Edit this task? (y/n): ")?;
        if edit.trim().eq_ignore_ascii_case("y") {
            let title = task.title.clone();
            self.edit_task(&title)?;
        }
        Ok(())
    }

    /// 把 View 子菜单的选项翻译成视图
    fn filtered_view(&self, choice: &str) -> Vec<Task> {
        match choice {
            "1" => self.tasks.clone(),
            "5" => store::sort_by_due_date(&self.tasks),
            other => {
                let status = match other {
                    "2" => "in-progress",
                    "3" => "pending",
                    "4" => "done",
                    // 未知选项等价于未知状态过滤：空视图
                    _ => "",
                };
                store::filter_by_status(&self.tasks, status)
            }
        }
    }

    /// 编辑流程：三个字段全部重新校验，更新按原始序列的标题精确匹配
    fn edit_task(&mut self, title: &str) -> Result<()> {
        let changes = TaskChanges {
            status: Some(prompt::prompt_status(&mut self.console)?),
            difficulty: Some(prompt::prompt_difficulty(&mut self.console)?),
            due_date: Some(prompt::prompt_due_date(&mut self.console, self.today)?),
        };

        self.tasks = store::update(&self.tasks, title, &changes, self.today);
        self.console.line("✓ Task updated.")?;
        Ok(())
    }

    /// SearchTask 子流程
    fn search_task(&mut self) -> Result<()> {
        let title = self.console.prompt("Exact title: ")?;
        match store::find_by_title(&self.tasks, &title) {
            Some(task) => ui::render_task(self.console.writer(), task)?,
            None => self.console.line("Task not found.")?,
        }
        Ok(())
    }

    /// AddTask 子流程
    fn add_task(&mut self) -> Result<()> {
        self.console.line("\n=== NEW TASK ===")?;
        let title = self.console.prompt("Title: ")?;
        let description = self.console.prompt("Description: ")?;
        let status = prompt::prompt_status(&mut self.console)?;
        let difficulty = prompt::prompt_difficulty(&mut self.console)?;
        let due_date = prompt::prompt_due_date(&mut self.console, self.today)?;

        let task = Task::new(title, self.today)
            .with_description(description)
            .with_status(status)
            .with_difficulty(difficulty)
            .with_due_date(due_date);

        self.tasks = store::add(&self.tasks, task);
        self.console.line("✓ Task added.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::{seed_tasks, Difficulty, TaskStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session_date() -> NaiveDate {
        date(2025, 6, 1)
    }

    /// 跑一段脚本化输入，返回最终序列和全部输出
    fn run_script(tasks: Vec<Task>, input: &str) -> (Vec<Task>, String) {
        let console = Console::new(input.as_bytes(), Vec::new());
        let mut session = Session::new(console, tasks, session_date());
        session.run().unwrap();
        let (tasks, console) = session.into_parts();
        (tasks, String::from_utf8(console.into_writer()).unwrap())
    }

    #[test]
    fn test_exit_prints_farewell() {
        let (tasks, out) = run_script(seed_tasks(session_date()), "0\n");
        assert_eq!(tasks.len(), 4);
        assert!(out.contains("Bye..."));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let (_, out) = run_script(seed_tasks(session_date()), "9\n0\n");
        assert!(out.contains("Invalid option."));
        assert_eq!(out.matches("===== MAIN MENU =====").count(), 2);
    }

    #[test]
    fn test_add_flow_appends_and_confirms() {
        let input = "3\nWrite docs\nUser guide for the CLI\npending\nmedium\n2099-01-01\n0\n";
        let (tasks, out) = run_script(seed_tasks(session_date()), input);

        assert_eq!(tasks.len(), 5);
        let added = tasks.last().unwrap();
        assert_eq!(added.title, "Write docs");
        assert_eq!(added.description, "User guide for the CLI");
        assert_eq!(added.status, TaskStatus::Pending);
        assert_eq!(added.difficulty, Difficulty::Medium);
        assert_eq!(added.due_date, Some(date(2099, 1, 1)));
        assert_eq!(added.created_on, session_date());
        assert_eq!(added.last_edited_on, session_date());
        assert!(out.contains("=== NEW TASK ==="));
        assert!(out.contains("✓ Task added."));
    }

    #[test]
    fn test_add_flow_retries_bad_field_input() {
        // 状态、难度、日期各给一次坏输入
        let input = "3\nT\n\nsoon\npending\nbrutal\neasy\n2020-01-01\n2099-01-01\n0\n";
        let (tasks, out) = run_script(seed_tasks(session_date()), input);

        assert_eq!(tasks.len(), 5);
        assert!(out.contains("Invalid status. Try again."));
        assert!(out.contains("Invalid difficulty. Try again."));
        assert!(out.contains("The date cannot be earlier than today."));
        assert!(out.contains("✓ Task added."));
    }

    #[test]
    fn test_search_flow_is_case_insensitive_and_trimmed() {
        let (_, out) = run_script(seed_tasks(session_date()), "2\n  learn html \n0\n");
        assert!(out.contains("Title: Learn HTML"));
        assert!(out.contains("Description: Take an HTML course"));
    }

    #[test]
    fn test_search_flow_not_found() {
        let (_, out) = run_script(seed_tasks(session_date()), "2\nLearn COBOL\n0\n");
        assert!(out.contains("Task not found."));
        assert!(!out.contains("Title: Learn COBOL"));
    }

    #[test]
    fn test_view_filter_lists_matching_titles_only() {
        let (_, out) = run_script(seed_tasks(session_date()), "1\n3\n\n0\n");
        // pending 的两条
        assert!(out.contains("[1] Learn HTML"));
        assert!(out.contains("[2] Learn JS"));
        assert!(!out.contains("Learn CSS"));
        assert!(!out.contains("Learn React"));
    }

    #[test]
    fn test_view_unknown_filter_shows_no_tasks() {
        let (_, out) = run_script(seed_tasks(session_date()), "1\n9\n\n0\n");
        assert!(out.contains("No tasks."));
    }

    #[test]
    fn test_view_detail_indexes_into_filtered_view() {
        // 按截止日期排序后第 1 条是 Learn React（2025-10-10）
        let (_, out) = run_script(seed_tasks(session_date()), "1\n5\n1\nn\n0\n");
        assert!(out.contains("Title: Learn React"));
    }

    #[test]
    fn test_view_detail_out_of_range_is_silent() {
        let (tasks, out) = run_script(seed_tasks(session_date()), "1\n1\n99\n0\n");
        assert_eq!(tasks.len(), 4);
        assert!(!out.contains("Title: "));

        let (_, out) = run_script(seed_tasks(session_date()), "1\n1\nabc\n0\n");
        assert!(!out.contains("Title: "));
    }

    #[test]
    fn test_edit_flow_updates_working_sequence() {
        // 排序视图里选第 1 条（Learn React），改成 cancelled/easy/2099-12-31
        let input = "1\n5\n1\ny\ncancelled\neasy\n2099-12-31\n0\n";
        let (tasks, out) = run_script(seed_tasks(session_date()), input);

        assert!(out.contains("✓ Task updated."));

        // 工作序列保持插入顺序，被编辑的是原序列里的 Learn React
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[3].title, "Learn React");
        assert_eq!(tasks[3].status, TaskStatus::Cancelled);
        assert_eq!(tasks[3].difficulty, Difficulty::Easy);
        assert_eq!(tasks[3].due_date, Some(date(2099, 12, 31)));
        assert_eq!(tasks[3].last_edited_on, session_date());

        // 其余任务逐字未动
        let seed = seed_tasks(session_date());
        assert_eq!(&tasks[..3], &seed[..3]);
    }

    #[test]
    fn test_edit_declined_leaves_sequence_untouched() {
        let seed = seed_tasks(session_date());
        let (tasks, _) = run_script(seed.clone(), "1\n1\n1\nn\n0\n");
        assert_eq!(tasks, seed);
    }

    #[test]
    fn test_closed_input_mid_prompt_is_an_error() {
        let console = Console::new("3\nOnly a title\n".as_bytes(), Vec::new());
        let mut session = Session::new(console, Vec::new(), session_date());
        assert!(matches!(session.run(), Err(AppError::InputClosed)));
        // 半途而废的 add 不会留下任务
        assert!(session.tasks().is_empty());
    }
}
