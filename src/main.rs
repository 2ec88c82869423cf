//! # imgext - 图像文件后缀规范化工具
//!
//! 按文件内容（头部魔数）识别图像真实格式，把文件后缀改成与内容
//! 一致的规范后缀，不信任现有文件名。
//!
//! ## 用法
//! ```text
//! imgext [--dry-run] [--concurrency N] <GLOB>...
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (glob 收集与并行执行)
//!   │     └── formats/   (图像格式签名)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod formats;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
