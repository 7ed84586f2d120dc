//! # renum - 尾随数字文件批量重命名工具
//!
//! 将以裸数字结尾的文件名改写为 "name (number).ext" 形式，
//! 例如 `video1.mp4` -> `video (1).mp4`。
//!
//! ## 子命令
//! - `scan` - 仅预览待重命名文件（不改动文件系统，可导出 CSV）
//! - `run`  - 预览、确认并执行重命名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (批处理驱动与命令执行逻辑)
//!   ├── rename/     (匹配、扫描、执行)
//!   ├── config.rs   (目录任务解析)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod models;
mod rename;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
