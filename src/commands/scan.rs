//! # scan 命令实现
//!
//! 仅预览待重命名文件，不改动文件系统。
//!
//! ## 功能
//! - 扫描各配置目录，汇总候选列表
//! - tabled 表格展示
//! - 可选导出候选列表为 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `config.rs`, `commands/mod.rs` 的预览流程
//! - 使用 `utils/output.rs`
//! - 使用 `csv` 库写入导出文件

use crate::cli::scan::ScanArgs;
use crate::commands::{preview_jobs, print_candidate_table, PreviewReport};
use crate::config;
use crate::error::{RenumError, Result};
use crate::utils::output;

use std::path::Path;

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Rename Preview (dry run)");

    let jobs = config::resolve_jobs(&args.jobs, args.jobs_csv.as_deref())?;
    let report = preview_jobs(&jobs);

    if report.total_candidates() == 0 {
        output::print_success("No files found that need renaming.");
        return Ok(());
    }

    output::print_separator();
    print_candidate_table(&report);
    output::print_info(&format!(
        "Total files to rename: {}",
        report.total_candidates()
    ));

    if let Some(export_path) = &args.export {
        export_candidates(&report, export_path)?;
        output::print_done(&format!(
            "Exported candidate list to '{}'",
            export_path.display()
        ));
    }

    Ok(())
}

/// 导出候选列表为 CSV（directory,old_name,new_name）
fn export_candidates(report: &PreviewReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["directory", "old_name", "new_name"])?;

    for section in &report.sections {
        for candidate in &section.outcome.candidates {
            wtr.write_record([
                section.job.dir.display().to_string(),
                candidate.old_name.clone(),
                candidate.new_name.clone(),
            ])?;
        }
    }

    wtr.flush().map_err(|e| RenumError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
