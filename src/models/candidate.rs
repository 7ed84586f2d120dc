//! # 重命名候选
//!
//! 扫描阶段产生、展示与执行阶段消费的纯值记录。
//!
//! ## 依赖关系
//! - 被 `rename/scanner.rs` 创建
//! - 被 `rename/executor.rs` 和 `commands/` 消费

use serde::Serialize;
use std::path::PathBuf;

/// 一次待执行的重命名操作
#[derive(Debug, Clone, Serialize)]
pub struct RenameCandidate {
    /// 原始完整路径
    pub old_path: PathBuf,

    /// 目标完整路径（与原路径同一父目录）
    pub new_path: PathBuf,

    /// 原始文件名
    pub old_name: String,

    /// 目标文件名
    pub new_name: String,
}
