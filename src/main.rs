//! # Heiconv - HEIC/HEIF 批量转换工具
//!
//! 将输入目录中的 HEIC/HEIF 图片批量转换为 JPEG。
//!
//! ## 用法
//! - `heiconv [input_dir] [output_dir] [quality]` - 位置参数均可省略
//!   （默认 `input`, `output`, `90`）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (文件收集与批量执行)
//!   ├── codec.rs    (HEIF 解码 / JPEG 编码)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
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
