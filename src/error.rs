//! # 统一错误处理模块
//!
//! 定义 imgext 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单文件处理错误的消息自带阶段标签（couldn't open / classify / rename），
//! 打印时由批量执行器统一包装为 `Couldn't handle "<path>": <detail>`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// imgext 统一错误类型
#[derive(Error, Debug)]
pub enum ImgextError {
    // ─────────────────────────────────────────────────────────────
    // 致命错误（在任何文件处理开始前中止整个运行）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    // ─────────────────────────────────────────────────────────────
    // 单文件处理错误（只影响该文件，运行继续）
    // ─────────────────────────────────────────────────────────────
    #[error("couldn't open: {source}")]
    OpenFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't classify: {source}")]
    ClassifyFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't classify: unrecognized image format")]
    UnrecognizedFormat,

    #[error("couldn't rename: {source}")]
    RenameFailed {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 运行汇总
    // ─────────────────────────────────────────────────────────────
    #[error("Encountered {0} error(s)")]
    FilesFailed(usize),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ImgextError>;
