//! # scan 子命令 CLI 定义
//!
//! 预览待重命名文件，可选导出候选列表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory job 'DIR' or 'DIR=MAX' (repeatable; default: built-in media mapping)
    #[arg(short = 'j', long = "job", value_name = "DIR[=MAX]")]
    pub jobs: Vec<String>,

    /// CSV file with one 'directory,max_candidates' row per job
    #[arg(long, value_name = "FILE", conflicts_with = "jobs")]
    pub jobs_csv: Option<PathBuf>,

    /// Export the candidate list as CSV (directory,old_name,new_name)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}
