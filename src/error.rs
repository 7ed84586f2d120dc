//! # 统一错误处理模块
//!
//! 定义 renum 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有真正致命的情况才会成为错误变体并向上传播；单个文件的
//! 重命名失败属于可恢复情况，在发生处打印后继续处理。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// renum 统一错误类型
#[derive(Error, Debug)]
pub enum RenumError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid job spec '{0}' (expected DIR or DIR=MAX, e.g. './music=200')")]
    InvalidJobSpec(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 标准输入
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read confirmation from stdin")]
    PromptError {
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenumError>;
