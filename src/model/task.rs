use chrono::NaiveDate;

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// 尚未开始
    Pending,
    /// 进行中
    InProgress,
    /// 已完成
    Done,
    /// 已取消
    Cancelled,
}

impl TaskStatus {
    /// 全部合法状态（prompt 提示文案按此顺序展示）
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Done,
        TaskStatus::Cancelled,
    ];

    /// 返回状态的规范小写标签
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    /// 解析用户输入（大小写不敏感，两侧去空白）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            "cancelled" => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }
}

/// 任务难度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 全部合法难度
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 返回难度的规范小写标签
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 解析用户输入（大小写不敏感，两侧去空白）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// 任务记录
///
/// 值语义的不可变记录：没有任何 `&mut self` 方法，所有"修改"
/// 都经由 [`Task::apply`] 产生一条新记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务标题（会话内的自然标识）
    pub title: String,
    /// 任务描述（可为空）
    pub description: String,
    /// 当前状态
    pub status: TaskStatus,
    /// 难度
    pub difficulty: Difficulty,
    /// 创建日期（创建后不再变化）
    pub created_on: NaiveDate,
    /// 最近一次编辑日期（每次字段变化都刷新）
    pub last_edited_on: NaiveDate,
    /// 截止日期（可选）
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// 创建新任务，除标题外全部取默认值
    ///
    /// `created_on == last_edited_on == today`。可选字段通过
    /// `with_*` builder 补充。这里不做任何校验，调用方必须传入
    /// 已经解析好的枚举 / 日期。
    pub fn new(title: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            difficulty: Difficulty::Easy,
            created_on: today,
            last_edited_on: today,
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// 合并一组变更，返回新记录
    ///
    /// 未变更的字段逐字拷贝，`last_edited_on` 刷新为 `today`。
    pub fn apply(&self, changes: &TaskChanges, today: NaiveDate) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            status: changes.status.unwrap_or(self.status),
            difficulty: changes.difficulty.unwrap_or(self.difficulty),
            created_on: self.created_on,
            last_edited_on: today,
            due_date: changes.due_date.or(self.due_date),
        }
    }
}

/// 一组待合并的字段变更
///
/// `None` 表示该字段保持不变。编辑流程总是三项全填；
/// `Default` 提供空变更集。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub status: Option<TaskStatus>,
    pub difficulty: Option<Difficulty>,
    pub due_date: Option<NaiveDate>,
}
