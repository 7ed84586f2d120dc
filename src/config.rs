//! # 目录任务配置
//!
//! 将命令行输入解析为有序的 `DirectoryJob` 列表，显式传入批处理
//! 驱动，不依赖任何模块级状态。
//!
//! ## 解析优先级
//! 1. `--job DIR[=MAX]`（可重复）
//! 2. `--jobs-csv FILE`（两列 CSV：directory,max_candidates）
//! 3. 内置默认映射（./music=200, ./images=61, ./video=50）
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs`, `commands/run.rs` 调用
//! - 使用 `csv` 读取任务文件

use crate::error::{RenumError, Result};
use crate::models::DirectoryJob;

use std::path::Path;

/// 内置默认任务，来自最初的媒体库整理脚本
pub fn default_jobs() -> Vec<DirectoryJob> {
    vec![
        DirectoryJob::new("./music", Some(200)),
        DirectoryJob::new("./images", Some(61)),
        DirectoryJob::new("./video", Some(50)),
    ]
}

/// 按优先级将 CLI 输入解析为最终任务列表
///
/// `--job` 与 `--jobs-csv` 的互斥由 clap 层保证。
pub fn resolve_jobs(specs: &[String], jobs_csv: Option<&Path>) -> Result<Vec<DirectoryJob>> {
    if !specs.is_empty() {
        return specs.iter().map(|s| parse_job_spec(s)).collect();
    }

    if let Some(path) = jobs_csv {
        return load_jobs_csv(path);
    }

    Ok(default_jobs())
}

/// 解析单个 --job 参数：`DIR` 或 `DIR=MAX`
pub fn parse_job_spec(spec: &str) -> Result<DirectoryJob> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(RenumError::InvalidJobSpec(spec.to_string()));
    }

    match spec.rsplit_once('=') {
        Some((dir, max)) => {
            let dir = dir.trim();
            let max: usize = max
                .trim()
                .parse()
                .map_err(|_| RenumError::InvalidJobSpec(spec.to_string()))?;
            // 上限为 0 没有意义，视为写错而不是不限
            if dir.is_empty() || max == 0 {
                return Err(RenumError::InvalidJobSpec(spec.to_string()));
            }
            Ok(DirectoryJob::new(dir, Some(max)))
        }
        None => Ok(DirectoryJob::new(spec, None)),
    }
}

/// 从 CSV 文件读取任务列表
///
/// 每行 `directory,max_candidates`，第二列可空（不限）；
/// 首行若以 "directory" 开头则视为表头；空行跳过。
pub fn load_jobs_csv(path: &Path) -> Result<Vec<DirectoryJob>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut jobs = Vec::new();

    for (index, record) in rdr.records().enumerate() {
        let record = record?;

        let dir = match record.get(0) {
            Some(d) if !d.is_empty() => d,
            _ => continue,
        };

        if index == 0 && dir.eq_ignore_ascii_case("directory") {
            continue;
        }

        let max = match record.get(1) {
            Some(m) if !m.is_empty() => Some(m.parse::<usize>().map_err(|_| {
                RenumError::InvalidJobSpec(format!("{} (line {} of {})", m, index + 1, path.display()))
            })?),
            _ => None,
        };

        jobs.push(DirectoryJob::new(dir, max));
    }

    Ok(jobs)
}
