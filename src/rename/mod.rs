//! # 重命名核心模块
//!
//! 提供从文件名匹配到文件系统执行的完整重命名能力。
//!
//! ## 功能
//! - 尾随数字模式匹配与目标名计算
//! - 单层目录扫描与候选收集
//! - 候选列表回放执行
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: matcher, scanner, executor

pub mod executor;
pub mod matcher;
pub mod scanner;

pub use executor::{execute_candidates, ExecuteOutcome};
pub use matcher::NumberMatcher;
pub use scanner::{scan_directory, ScanOutcome};
