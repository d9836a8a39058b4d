//! 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理。字段校验永远不会产生
//! 错误（校验器内部无限重试），只有控制台 I/O 本身可能失败。

use std::io;
use thiserror::Error;

/// 会话错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O 错误（读写控制台失败）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 输入流已关闭（EOF），交互会话无法继续
    #[error("input closed")]
    InputClosed,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::InputClosed;
        assert_eq!(err.to_string(), "input closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
