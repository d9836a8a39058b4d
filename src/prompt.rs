//! 交互式输入：控制台抽象与字段校验器
//!
//! `Console` 把行读取能力作为参数注入（生产环境是锁定的 stdin，
//! 测试里是一段脚本化的字节），校验器本身是"纯判定 + 阻塞重试
//! 循环"的组合：判定失败打印提示后继续问，直到拿到合法输入。

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::{AppError, Result};
use crate::model::{Difficulty, TaskStatus};

/// 控制台：一个行输入源加一个输出汇
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// 绑定真实的 stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 打印提示并读取一行（去掉行尾换行符）
    ///
    /// 输入流关闭（EOF）返回 [`AppError::InputClosed`]。
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// 输出一行文本
    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", text.as_ref())?;
        Ok(())
    }

    /// 裸的输出端（给渲染函数用）
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// 取回输出汇（测试里检查输出用）
    #[allow(dead_code)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// 截止日期校验失败的原因，Display 即重试提示文案
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid format.")]
    Format,

    #[error("The date cannot be earlier than today.")]
    Past,
}

/// 校验截止日期输入（纯判定）
///
/// 必须严格符合 `YYYY-MM-DD`（4-2-2 位数字、`-` 分隔），必须是
/// 真实存在的日历日期，且不得早于 `today`。
pub fn parse_due_date(input: &str, today: NaiveDate) -> std::result::Result<NaiveDate, DateError> {
    if !is_date_shape(input) {
        return Err(DateError::Format);
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateError::Format)?;
    if date < today {
        return Err(DateError::Past);
    }
    Ok(date)
}

/// 检查 `YYYY-MM-DD` 形状
///
/// chrono 的 `%m`/`%d` 接受不补零的写法，所以这里先按字节检查，
/// 把 "2025-1-1" 这类输入挡在解析之前。
fn is_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
}

/// 询问任务状态，直到输入合法
pub fn prompt_status<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<TaskStatus> {
    let text = format!("Status ({}): ", join_labels(TaskStatus::ALL.iter().map(|s| s.label())));
    loop {
        let line = console.prompt(&text)?;
        match TaskStatus::parse(&line) {
            Some(status) => return Ok(status),
            None => console.line("Invalid status. Try again.")?,
        }
    }
}

/// 询问任务难度，直到输入合法
pub fn prompt_difficulty<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Difficulty> {
    let text = format!(
        "Difficulty ({}): ",
        join_labels(Difficulty::ALL.iter().map(|d| d.label()))
    );
    loop {
        let line = console.prompt(&text)?;
        match Difficulty::parse(&line) {
            Some(difficulty) => return Ok(difficulty),
            None => console.line("Invalid difficulty. Try again.")?,
        }
    }
}

/// 询问截止日期，直到输入合法
pub fn prompt_due_date<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<NaiveDate> {
    loop {
        let line = console.prompt("Due date (YYYY-MM-DD): ")?;
        match parse_due_date(&line, today) {
            Ok(date) => return Ok(date),
            Err(reason) => console.line(reason.to_string())?,
        }
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(" / ")
}
