//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，以及两个子命令共用的预览流程：
//! 逐目录扫描、打印待重命名项、汇总候选列表。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `rename/`, `models/`, `utils/`
//! - 子模块: run, scan

pub mod run;
pub mod scan;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::DirectoryJob;
use crate::rename::scanner::{scan_directory, ScanOutcome};
use crate::rename::NumberMatcher;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Scan(args) => scan::execute(args),
        Commands::Run(args) => run::execute(args),
    }
}

/// 单个目录的预览结果
pub struct PreviewSection {
    /// 对应的目录任务
    pub job: DirectoryJob,
    /// 扫描结果
    pub outcome: ScanOutcome,
}

/// 跨目录汇总的预览报告
#[derive(Default)]
pub struct PreviewReport {
    /// 各目录的预览段，按任务配置顺序
    pub sections: Vec<PreviewSection>,
}

impl PreviewReport {
    /// 全部候选总数
    pub fn total_candidates(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.outcome.candidates.len())
            .sum()
    }
}

/// 预览流程：扫描每个存在的目录，打印待重命名项，汇总候选。
/// 不改动文件系统。
pub(crate) fn preview_jobs(jobs: &[DirectoryJob]) -> PreviewReport {
    let matcher = NumberMatcher::new();
    let mut report = PreviewReport::default();

    for job in jobs {
        if !job.dir.is_dir() {
            output::print_warning(&format!(
                "Directory not found, skipping: {}",
                job.dir.display()
            ));
            continue;
        }

        output::print_info(&format!("Processing: {}", job.describe()));

        let outcome = match scan_directory(job, &matcher) {
            Ok(outcome) => outcome,
            Err(e) => {
                // 目录在检查与扫描之间消失也按跳过处理
                output::print_warning(&e.to_string());
                continue;
            }
        };

        for candidate in &outcome.candidates {
            output::print_pending(&candidate.old_name, &candidate.new_name);
        }

        if outcome.limit_reached {
            if let Some(max) = job.max_candidates {
                output::print_info(&format!("Reached maximum of {} files", max));
            }
        }

        report.sections.push(PreviewSection {
            job: job.clone(),
            outcome,
        });
    }

    report
}

/// 候选汇总表格行
#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Directory")]
    directory: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
}

/// 打印跨目录的候选汇总表
pub(crate) fn print_candidate_table(report: &PreviewReport) {
    let rows: Vec<CandidateRow> = report
        .sections
        .iter()
        .flat_map(|section| {
            section.outcome.candidates.iter().map(move |c| CandidateRow {
                directory: section.job.dir.display().to_string(),
                from: c.old_name.clone(),
                to: c.new_name.clone(),
            })
        })
        .collect();

    println!("{}", Table::new(rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_preview_song_cover_scenario() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "song1.mp3");
        touch(tmp.path(), "song2.mp3");
        touch(tmp.path(), "cover.jpg");

        let jobs = vec![DirectoryJob::new(tmp.path(), Some(200))];
        let report = preview_jobs(&jobs);

        assert_eq!(report.total_candidates(), 2);
        let names: Vec<&str> = report.sections[0]
            .outcome
            .candidates
            .iter()
            .map(|c| c.new_name.as_str())
            .collect();
        assert_eq!(names, vec!["song (1).mp3", "song (2).mp3"]);

        // 预览不改动文件系统
        assert!(tmp.path().join("song1.mp3").exists());
        assert!(tmp.path().join("song2.mp3").exists());
        assert!(tmp.path().join("cover.jpg").exists());
    }

    #[test]
    fn test_preview_collects_across_directories() {
        let tmp = TempDir::new().unwrap();
        let music = tmp.path().join("music");
        let video = tmp.path().join("video");
        fs::create_dir(&music).unwrap();
        fs::create_dir(&video).unwrap();
        touch(&music, "track7.flac");
        touch(&video, "clip12.mp4");

        let jobs = vec![
            DirectoryJob::new(&music, Some(10)),
            DirectoryJob::new(&video, Some(10)),
        ];
        let report = preview_jobs(&jobs);

        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.total_candidates(), 2);
        assert_eq!(report.sections[1].outcome.candidates[0].new_name, "clip (12).mp4");
    }

    #[test]
    fn test_preview_skips_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir(&real).unwrap();
        touch(&real, "a1.txt");

        let jobs = vec![
            DirectoryJob::new(tmp.path().join("gone"), Some(10)),
            DirectoryJob::new(&real, Some(10)),
        ];
        let report = preview_jobs(&jobs);

        // 不存在的目录被跳过，其余目录继续处理
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.total_candidates(), 1);
    }

    #[test]
    fn test_empty_report_total() {
        let report = PreviewReport::default();
        assert_eq!(report.total_candidates(), 0);
    }
}
