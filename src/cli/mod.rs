//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。imgext 只有一个操作，
//! 不设子命令，参数直接挂在顶层。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Parser;

/// imgext - 按文件内容规范化图像文件后缀
#[derive(Parser, Debug)]
#[command(name = "imgext")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Normalize image file extensions to match their actual encoded format",
    long_about = None
)]
pub struct Cli {
    /// Do not rename files, just print what renames would occur
    #[arg(long, alias = "dry_run", default_value_t = false)]
    pub dry_run: bool,

    /// Number of files to process at once (0 = choose automatically)
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub concurrency: i64,

    /// Glob patterns selecting the files to examine
    #[arg(required = true, value_name = "GLOB")]
    pub patterns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["imgext", "*.png"]).unwrap();
        assert!(!cli.dry_run);
        assert_eq!(cli.concurrency, 0);
        assert_eq!(cli.patterns, vec!["*.png".to_string()]);
    }

    #[test]
    fn test_patterns_are_required() {
        assert!(Cli::try_parse_from(["imgext"]).is_err());
    }

    #[test]
    fn test_dry_run_flag_and_alias() {
        let cli = Cli::try_parse_from(["imgext", "--dry-run", "*"]).unwrap();
        assert!(cli.dry_run);

        let cli = Cli::try_parse_from(["imgext", "--dry_run", "*"]).unwrap();
        assert!(cli.dry_run);
    }

    #[test]
    fn test_concurrency_value() {
        let cli = Cli::try_parse_from(["imgext", "--concurrency", "4", "*"]).unwrap();
        assert_eq!(cli.concurrency, 4);
    }

    #[test]
    fn test_negative_concurrency_parses() {
        // 负值由 commands/rename.rs 的校验拒绝，解析层放行
        let cli = Cli::try_parse_from(["imgext", "--concurrency=-2", "*"]).unwrap();
        assert_eq!(cli.concurrency, -2);
    }

    #[test]
    fn test_multiple_patterns() {
        let cli = Cli::try_parse_from(["imgext", "*.png", "*.jpg", "photos/*"]).unwrap();
        assert_eq!(cli.patterns.len(), 3);
    }
}
