//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `scan`: 仅预览待重命名文件，不改动文件系统
//! - `run`: 预览 -> 确认 -> 执行
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, scan

pub mod run;
pub mod scan;

use clap::{Parser, Subcommand};

/// renum - 尾随数字文件批量重命名工具
#[derive(Parser)]
#[command(name = "renum")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Rename files ending in a bare number to 'name (number).ext'", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Preview pending renames without touching the filesystem
    Scan(scan::ScanArgs),

    /// Preview, confirm, then execute renames
    Run(run::RunArgs),
}
