//! # run 命令实现
//!
//! 批处理驱动：预览、确认、执行，线性推进，无回环。
//!
//! ## 功能
//! - 预览所有配置目录并汇总候选
//! - 单次 y/N 确认（--yes 跳过）
//! - 回放捕获的候选列表执行重命名，汇总统计
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `config.rs`, `commands/mod.rs` 的预览流程
//! - 使用 `rename/executor.rs`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::cli::run::RunArgs;
use crate::commands::preview_jobs;
use crate::config;
use crate::error::Result;
use crate::rename::executor::{execute_candidates, ExecuteOutcome};
use crate::utils::{output, prompt};

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("File Renaming");

    let jobs = config::resolve_jobs(&args.jobs, args.jobs_csv.as_deref())?;
    let report = preview_jobs(&jobs);

    if report.total_candidates() == 0 {
        output::print_success("No files found that need renaming.");
        return Ok(());
    }

    output::print_separator();
    output::print_info(&format!(
        "Total files to rename: {}",
        report.total_candidates()
    ));

    let confirmed = args.yes || prompt::confirm("Proceed with renaming?")?;
    if !confirmed {
        output::print_info("Renaming cancelled.");
        return Ok(());
    }

    // 回放预览捕获的候选列表，不重新扫描；
    // 执行器会在每次重命名前再次检查目标是否存在
    let mut total = ExecuteOutcome::default();
    for section in &report.sections {
        if section.outcome.candidates.is_empty() {
            continue;
        }
        output::print_info(&format!("Processing: {}", section.job.dir.display()));
        total.merge(execute_candidates(&section.outcome.candidates));
    }

    output::print_separator();
    output::print_done(&format!(
        "Successfully renamed {} of {} file(s) ({} skipped, {} failed)",
        total.renamed,
        total.total(),
        total.skipped_existing,
        total.failed
    ));

    Ok(())
}
