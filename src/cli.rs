//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - `input`: 输入目录（默认 `input`）
//! - `output`: 输出目录（默认 `output`）
//! - `quality`: JPEG 质量 1-100（默认 `90`）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Parser;
use std::path::PathBuf;

/// Heiconv - HEIC/HEIF 批量转换工具
///
/// 质量参数以字符串接收，由 `commands/convert.rs` 自行校验，
/// 保证非法值统一以退出码 1 报告。
#[derive(Parser, Debug)]
#[command(name = "heiconv")]
#[command(version)]
#[command(about = "Batch HEIC/HEIF to JPEG converter", long_about = None)]
pub struct Cli {
    /// Input directory containing HEIC/HEIF files
    #[arg(default_value = "input")]
    pub input: PathBuf,

    /// Output directory for converted JPEG files
    #[arg(default_value = "output")]
    pub output: PathBuf,

    /// JPEG quality (integer, 1-100)
    #[arg(default_value = "90")]
    pub quality: String,
}
