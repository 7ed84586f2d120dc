//! # 目录扫描器
//!
//! 列出目录下一层的文件，套用尾随数字模式，生成有序的重命名候选列表。
//!
//! ## 功能
//! - 按路径字典序的确定性遍历（不递归）
//! - 目标已存在时告警跳过，且不占用上限名额
//! - 达到每目录上限后提前停止
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `rename/matcher.rs`, `models/`
//! - 使用 `walkdir` 遍历目录

use crate::error::{RenumError, Result};
use crate::models::{DirectoryJob, RenameCandidate};
use crate::rename::matcher::NumberMatcher;
use crate::utils::output;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 单目录扫描结果
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// 已记录的重命名候选（按原文件名有序）
    pub candidates: Vec<RenameCandidate>,

    /// 因目标已存在而跳过的文件数
    pub skipped_existing: usize,

    /// 是否因达到上限而提前停止
    pub limit_reached: bool,
}

/// 扫描单个目录，生成候选列表。不改动文件系统。
pub fn scan_directory(job: &DirectoryJob, matcher: &NumberMatcher) -> Result<ScanOutcome> {
    if !job.dir.is_dir() {
        return Err(RenumError::DirectoryNotFound {
            path: job.dir.display().to_string(),
        });
    }

    let files = list_files(&job.dir);
    let mut outcome = ScanOutcome::default();

    for path in &files {
        // 目录与特殊文件已被过滤；非 UTF-8 文件名静默跳过
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        let numbered = match matcher.split(name) {
            Some(n) => n,
            None => continue,
        };

        let new_name = numbered.bracketed();
        let new_path = path.with_file_name(&new_name);

        if new_path.exists() {
            output::print_warning(&format!("Target already exists: {}", new_name));
            outcome.skipped_existing += 1;
            continue;
        }

        outcome.candidates.push(RenameCandidate {
            old_path: path.clone(),
            new_path,
            old_name: name.to_string(),
            new_name,
        });

        if let Some(max) = job.max_candidates {
            if outcome.candidates.len() >= max {
                outcome.limit_reached = true;
                break;
            }
        }
    }

    Ok(outcome)
}

/// 列出目录下一层的普通文件，按路径排序
fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    fn job(dir: &Path, max: Option<usize>) -> DirectoryJob {
        DirectoryJob::new(dir, max)
    }

    #[test]
    fn test_scan_basic() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "song1.mp3");
        touch(tmp.path(), "song2.mp3");
        touch(tmp.path(), "cover.jpg");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), Some(200)), &matcher).unwrap();

        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.candidates[0].old_name, "song1.mp3");
        assert_eq!(outcome.candidates[0].new_name, "song (1).mp3");
        assert_eq!(outcome.candidates[1].new_name, "song (2).mp3");
        assert!(!outcome.limit_reached);
        assert_eq!(outcome.skipped_existing, 0);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "c1.txt");
        touch(tmp.path(), "a1.txt");
        touch(tmp.path(), "b1.txt");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), None), &matcher).unwrap();

        let names: Vec<&str> = outcome
            .candidates
            .iter()
            .map(|c| c.old_name.as_str())
            .collect();
        assert_eq!(names, vec!["a1.txt", "b1.txt", "c1.txt"]);
    }

    #[test]
    fn test_existing_target_is_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a1.txt");
        touch(tmp.path(), "a (1).txt");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), None), &matcher).unwrap();

        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.skipped_existing, 1);
        assert!(tmp.path().join("a1.txt").exists());
        assert!(tmp.path().join("a (1).txt").exists());
    }

    #[test]
    fn test_skip_does_not_consume_limit() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a1.txt");
        touch(tmp.path(), "a (1).txt");
        touch(tmp.path(), "b2.txt");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), Some(1)), &matcher).unwrap();

        // a1.txt 的目标已存在，被跳过后名额仍留给 b2.txt
        assert_eq!(outcome.candidates.len(), 1);
        assert_eq!(outcome.candidates[0].old_name, "b2.txt");
        assert_eq!(outcome.skipped_existing, 1);
        assert!(outcome.limit_reached);
    }

    #[test]
    fn test_limit_caps_recorded_candidates() {
        let tmp = TempDir::new().unwrap();
        for i in 1..=5 {
            touch(tmp.path(), &format!("file{}.txt", i));
        }

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), Some(3)), &matcher).unwrap();

        assert_eq!(outcome.candidates.len(), 3);
        assert!(outcome.limit_reached);
    }

    #[test]
    fn test_directories_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested1.d")).unwrap();
        touch(tmp.path(), "a1.txt");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), None), &matcher).unwrap();

        assert_eq!(outcome.candidates.len(), 1);
        assert_eq!(outcome.candidates[0].old_name, "a1.txt");
    }

    #[test]
    fn test_no_recursion() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "deep1.txt");

        let matcher = NumberMatcher::new();
        let outcome = scan_directory(&job(tmp.path(), None), &matcher).unwrap();

        assert!(outcome.candidates.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");

        let matcher = NumberMatcher::new();
        let result = scan_directory(&job(&missing, None), &matcher);

        assert!(matches!(
            result,
            Err(RenumError::DirectoryNotFound { .. })
        ));
    }
}
