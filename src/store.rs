//! 任务序列的纯变换函数
//!
//! 所有函数都不修改输入：每次写操作返回一个全新的 `Vec<Task>`，
//! 由会话循环负责把工作序列重新指向返回值。需要盖日期章的函数
//! 显式接收 `today`，保持自身纯函数性质。

use chrono::NaiveDate;

use crate::model::{Task, TaskChanges, TaskStatus};

/// 追加一个任务，返回新序列
pub fn add(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// 按标题查找第一个匹配的任务
///
/// 匹配规则：两侧去空白后大小写不敏感比较。找不到返回 `None`。
pub fn find_by_title<'a>(tasks: &'a [Task], title: &str) -> Option<&'a Task> {
    let needle = title.trim().to_lowercase();
    tasks
        .iter()
        .find(|t| t.title.trim().to_lowercase() == needle)
}

/// 按状态过滤，保持原相对顺序
///
/// `status` 是用户输入的状态文本（大小写不敏感）；
/// 未知或空的状态产出空序列。
pub fn filter_by_status(tasks: &[Task], status: &str) -> Vec<Task> {
    let Some(wanted) = TaskStatus::parse(status) else {
        return Vec::new();
    };

    tasks
        .iter()
        .filter(|t| t.status == wanted)
        .cloned()
        .collect()
}

/// 按标题更新任务，返回新序列
///
/// 标题采用逐字精确匹配（与 [`find_by_title`] 的宽松匹配刻意不
/// 对称，保持既有行为）。若多条任务标题完全相同，会被同样的变更
/// 集整体改写（广播语义）。不匹配的任务原样通过，`last_edited_on`
/// 也不动。
pub fn update(tasks: &[Task], title: &str, changes: &TaskChanges, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.title == title {
                t.apply(changes, today)
            } else {
                t.clone()
            }
        })
        .collect()
}

/// 生成标题列表，形如 `"[1] Learn HTML"`（1 起始序号，当前顺序）
pub fn titles(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("[{}] {}", i + 1, t.title))
        .collect()
}

/// 按截止日期升序排序，返回新序列
///
/// 没有截止日期的任务固定排在最后；稳定排序，日期相同（或同为
/// 缺失）时保持原相对顺序，因此重复应用结果不变。
pub fn sort_by_due_date(tasks: &[Task]) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
    next
}
