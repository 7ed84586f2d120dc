//! # 确认提示
//!
//! 阻塞读取标准输入的单行 y/N 确认。整个进程唯一的挂起点。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用

use crate::error::{RenumError, Result};

use std::io::{self, BufRead, Write};

/// 打印问题并等待单行输入；trim 后与 "y" 做不区分大小写比较。
/// EOF（空输入）视为拒绝。
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout()
        .flush()
        .map_err(|e| RenumError::PromptError { source: e })?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| RenumError::PromptError { source: e })?;

    Ok(line.trim().eq_ignore_ascii_case("y"))
}
