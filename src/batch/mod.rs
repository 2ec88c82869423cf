//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 展开 glob 模式并按路径去重（先发现、后处理的两阶段结构）
//! - 固定大小工作池并行处理
//! - 进度反馈与原子错误计数
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
