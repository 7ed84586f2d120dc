//! # 尾随数字匹配器
//!
//! 识别扩展名前以裸数字结尾的文件名，并计算带括号的目标文件名。
//!
//! ## 匹配规则
//! ```text
//! video1.mp4      -> video (1).mp4
//! video001.mp4    -> video (001).mp4   (数字原样保留)
//! readme.txt      -> 不匹配（无尾随数字）
//! archive.tar.gz  -> 不匹配（仅最后一个点段视为扩展名）
//! video (1).mp4   -> 不匹配（一次变换后保持稳定）
//! ```
//!
//! ## 依赖关系
//! - 被 `rename/scanner.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;

/// 文件名拆分结果：前缀 + 数字 + 扩展名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedName {
    /// 数字前的文件名主体（非空，非贪婪）
    pub prefix: String,

    /// 尾随数字串，原样保留（不去零不补零）
    pub digits: String,

    /// 含点的扩展名（如 ".mp4"）
    pub extension: String,
}

impl NumberedName {
    /// 计算带括号的目标文件名
    pub fn bracketed(&self) -> String {
        format!("{} ({}){}", self.prefix, self.digits, self.extension)
    }
}

/// 尾随数字匹配器，模式编译一次供整个扫描过程复用
pub struct NumberMatcher {
    pattern: Regex,
}

impl NumberMatcher {
    /// 创建匹配器
    pub fn new() -> Self {
        // 非空非贪婪前缀 + 一段数字 + 最后一个点段作为扩展名
        let pattern = Regex::new(r"^(.+?)(\d+)(\.[^.]+)$").unwrap();
        Self { pattern }
    }

    /// 拆分文件名；无尾随数字时返回 None
    pub fn split(&self, name: &str) -> Option<NumberedName> {
        let caps = self.pattern.captures(name)?;
        Some(NumberedName {
            prefix: caps[1].to_string(),
            digits: caps[2].to_string(),
            extension: caps[3].to_string(),
        })
    }
}

impl Default for NumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}
