//! # 目录任务
//!
//! 一个待处理目录与其候选数上限，驱动端以有序列表显式传入。
//!
//! ## 依赖关系
//! - 由 `config.rs` 构造
//! - 被 `rename/scanner.rs` 和 `commands/` 使用

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 目录任务：目录路径 + 每目录候选数上限
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryJob {
    /// 待扫描目录
    pub dir: PathBuf,

    /// 本目录最多记录的候选数；None 表示不限
    pub max_candidates: Option<usize>,
}

impl DirectoryJob {
    /// 创建目录任务
    pub fn new(dir: impl Into<PathBuf>, max_candidates: Option<usize>) -> Self {
        Self {
            dir: dir.into(),
            max_candidates,
        }
    }

    /// 人类可读的任务描述（用于进度输出）
    pub fn describe(&self) -> String {
        match self.max_candidates {
            Some(max) => format!("{} (max: {})", self.dir.display(), max),
            None => format!("{} (no limit)", self.dir.display()),
        }
    }
}
