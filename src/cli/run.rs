//! # run 子命令 CLI 定义
//!
//! 预览、确认并执行批量重命名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory job 'DIR' or 'DIR=MAX' (repeatable; default: built-in media mapping)
    #[arg(short = 'j', long = "job", value_name = "DIR[=MAX]")]
    pub jobs: Vec<String>,

    /// CSV file with one 'directory,max_candidates' row per job
    #[arg(long, value_name = "FILE", conflicts_with = "jobs")]
    pub jobs_csv: Option<PathBuf>,

    /// Answer yes to the confirmation prompt (non-interactive)
    #[arg(short = 'y', long = "yes", default_value_t = false)]
    pub yes: bool,
}
