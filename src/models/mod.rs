//! # 数据模型模块
//!
//! 定义重命名候选与目录任务两种纯值记录。
//! 两者都只在单次进程内存活，不做任何持久化。
//!
//! ## 依赖关系
//! - 被 `rename/`, `config.rs` 和 `commands/` 使用
//! - 子模块: candidate, job

pub mod candidate;
pub mod job;

pub use candidate::RenameCandidate;
pub use job::DirectoryJob;
