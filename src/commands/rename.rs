//! # rename 命令实现
//!
//! 按内容嗅探图像格式，把文件后缀规范化为格式对应的后缀。
//!
//! ## 功能
//! - 展开 glob 模式并去重（先发现、后处理）
//! - 并行逐文件：打开 -> 嗅探 -> 计算新路径 -> 比较 -> 重命名
//! - dry-run 模式只报告不改名
//! - 单文件失败计入错误数，不中断其余文件
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `formats/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::Cli;
use crate::error::{ImgextError, Result};
use crate::formats;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 rename 命令
pub fn execute(args: Cli) -> Result<()> {
    if args.concurrency < 0 {
        return Err(ImgextError::InvalidArgument(
            "--concurrency must be non-negative".to_string(),
        ));
    }

    // 两阶段：先完整收集文件集合，再开始任何处理
    let files: Vec<PathBuf> = FileCollector::new(args.patterns)
        .collect()?
        .into_iter()
        .collect();

    output::print_info(&format!("Renaming {} file(s)", files.len()));
    if args.dry_run {
        output::print_warning("Dry run: no files will be renamed");
    }

    let dry_run = args.dry_run;
    let runner = BatchRunner::new(args.concurrency as usize);
    let result = runner.run(files, |path| match process_file(path, dry_run) {
        Ok(RenameOutcome::Renamed { from, to }) => ProcessResult::Renamed(from, to),
        Ok(RenameOutcome::Unchanged) => ProcessResult::Unchanged,
        Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
    });

    if result.failed > 0 {
        return Err(ImgextError::FilesFailed(result.failed));
    }

    output::print_done(&format!(
        "Processed {} file(s): {} renamed, {} already correct",
        result.total(),
        result.renamed,
        result.unchanged
    ));

    Ok(())
}

/// 单文件处理结论
#[derive(Debug)]
enum RenameOutcome {
    /// 后缀与内容不符（dry-run 时未实际改名）
    Renamed { from: String, to: String },
    /// 后缀已正确
    Unchanged,
}

/// 处理单个文件：嗅探格式，需要时重命名
fn process_file(path: &Path, dry_run: bool) -> Result<RenameOutcome> {
    let mut file = fs::File::open(path).map_err(|e| ImgextError::OpenFailed { source: e })?;
    let format = formats::sniff_format(&mut file)?;

    // 重命名前释放句柄，部分平台不允许重命名仍被打开的文件
    drop(file);

    let new_path = normalized_path(path, format.extension());
    if new_path == path {
        return Ok(RenameOutcome::Unchanged);
    }

    let from = path.display().to_string();
    let to = new_path.display().to_string();

    if !dry_run {
        fs::rename(path, &new_path).map_err(|e| ImgextError::RenameFailed { source: e })?;
    }

    Ok(RenameOutcome::Renamed { from, to })
}

/// 计算规范化路径：去掉基础名最后一个 '.' 起的旧后缀，换上检测出的后缀
///
/// 基础名中没有 '.' 时直接追加后缀。
fn normalized_path(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
