//! # 重命名执行器
//!
//! 回放预览阶段捕获的候选列表，逐个执行文件系统重命名。
//!
//! ## 功能
//! - 执行前再次检查目标是否存在（预览与执行之间可能有间隔）
//! - 单个文件失败只告警，不中断后续处理，无重试
//! - indicatif 进度条反馈
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::models::RenameCandidate;
use crate::utils::{output, progress};

use std::fs;

/// 执行结果统计
#[derive(Debug, Default)]
pub struct ExecuteOutcome {
    /// 成功重命名数
    pub renamed: usize,

    /// 执行时目标已存在而跳过的数量
    pub skipped_existing: usize,

    /// 重命名失败数
    pub failed: usize,
}

impl ExecuteOutcome {
    /// 合并另一批执行结果
    pub fn merge(&mut self, other: ExecuteOutcome) {
        self.renamed += other.renamed;
        self.skipped_existing += other.skipped_existing;
        self.failed += other.failed;
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed + self.skipped_existing + self.failed
    }
}

/// 顺序执行候选列表中的所有重命名
pub fn execute_candidates(candidates: &[RenameCandidate]) -> ExecuteOutcome {
    let pb = progress::create_progress_bar(candidates.len() as u64, "Renaming");
    let mut outcome = ExecuteOutcome::default();

    for candidate in candidates {
        // 预览之后目标可能已被外部创建
        if candidate.new_path.exists() {
            pb.suspend(|| {
                output::print_warning(&format!(
                    "Target already exists: {}",
                    candidate.new_name
                ));
            });
            outcome.skipped_existing += 1;
            pb.inc(1);
            continue;
        }

        match fs::rename(&candidate.old_path, &candidate.new_path) {
            Ok(()) => {
                pb.suspend(|| output::print_rename(&candidate.old_name, &candidate.new_name));
                outcome.renamed += 1;
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!(
                        "Failed to rename {}: {}",
                        candidate.old_name, e
                    ));
                });
                outcome.failed += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    outcome
}
