//! # 美化输出工具
//!
//! 提供统一的终端输出样式。重命名行和信息行走标准输出，
//! 错误行走标准错误。
//!
//! ## 依赖关系
//! - 被 `commands/`、`batch/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印重命名消息
pub fn print_conversion(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        from.dimmed(),
        "->".cyan(),
        to
    );
}
