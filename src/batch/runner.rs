//! # 批量执行器
//!
//! 固定大小工作池，并行处理收集好的文件列表。
//!
//! ## 功能
//! - 基于 rayon 线程池的有界并行（0 = 按可用核数自动选择）
//! - 处理结果实时打印（重命名行、错误行），进度条挂起避免串行
//! - 原子计数汇总，单文件失败不影响其余文件
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印结果
//! - 使用 `rayon` 进行并行计算

use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 后缀与内容不符，已重命名（dry-run 时仅报告）
    Renamed(String, String), // (原路径, 新路径)
    /// 后缀已正确，无动作
    Unchanged,
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 重命名数量
    pub renamed: usize,
    /// 无需改动数量
    pub unchanged: usize,
    /// 失败数量
    pub failed: usize,
}

impl BatchResult {
    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed + self.unchanged + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，0 解析为可用核数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 解析后的并行作业数，恒 >= 1
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表
    ///
    /// 线程池在分发任何路径前整体建好，每个路径恰好交给一个工作线程，
    /// 在途任务数不超过作业数。所有工作线程结束后才返回。
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> BatchResult
    where
        F: Fn(&Path) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Examining");

        let renamed_count = AtomicUsize::new(0);
        let unchanged_count = AtomicUsize::new(0);
        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs())
            .build()
            .unwrap();

        pool.install(|| {
            files.par_iter().for_each(|file| {
                match processor(file) {
                    ProcessResult::Renamed(from, to) => {
                        renamed_count.fetch_add(1, Ordering::Relaxed);
                        pb.suspend(|| output::print_conversion(&from, &to));
                    }
                    ProcessResult::Unchanged => {
                        unchanged_count.fetch_add(1, Ordering::Relaxed);
                    }
                    ProcessResult::Failed(path, detail) => {
                        failed_count.fetch_add(1, Ordering::Relaxed);
                        pb.suspend(|| {
                            output::print_error(&format!(
                                "Couldn't handle \"{}\": {}",
                                path, detail
                            ));
                        });
                    }
                }
                pb.inc(1);
            });
        });

        pb.finish_and_clear();

        BatchResult {
            renamed: renamed_count.load(Ordering::Relaxed),
            unchanged: unchanged_count.load(Ordering::Relaxed),
            failed: failed_count.load(Ordering::Relaxed),
        }
    }
}
