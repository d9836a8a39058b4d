//! 菜单与任务详情的文本渲染
//!
//! 只负责往输出汇里写固定格式的文本，不碰任何状态。

use std::io::{self, Write};

use crate::model::Task;

/// 主菜单
pub fn render_main_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "===== MAIN MENU =====")?;
    writeln!(w, "[1] View tasks")?;
    writeln!(w, "[2] Search task")?;
    writeln!(w, "[3] Add task")?;
    writeln!(w, "[0] Exit")?;
    Ok(())
}

/// View tasks 子菜单
pub fn render_view_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "=== VIEW TASKS ===")?;
    writeln!(w, "[1] All")?;
    writeln!(w, "[2] In progress")?;
    writeln!(w, "[3] Pending")?;
    writeln!(w, "[4] Done")?;
    writeln!(w, "[5] Sorted by due date")?;
    Ok(())
}

/// 任务详情，字段顺序固定
pub fn render_task<W: Write>(w: &mut W, task: &Task) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Title: {}", task.title)?;
    writeln!(w, "Description: {}", task.description)?;
    writeln!(w, "Status: {}", task.status.label())?;
    writeln!(w, "Difficulty: {}", task.difficulty.label())?;
    writeln!(w, "Created on: {}", task.created_on)?;
    writeln!(w, "Last edited on: {}", task.last_edited_on)?;
    match task.due_date {
        Some(due) => writeln!(w, "Due date: {}", due)?,
        None => writeln!(w, "Due date: -")?,
    }
    writeln!(w, "-----------------------------------")?;
    Ok(())
}
