//! # 转换命令实现
//!
//! 批量将 HEIC/HEIF 文件转换为 JPEG。
//!
//! ## 功能
//! - 校验质量参数（整数，1-100）
//! - 校验输入目录，创建输出目录（含缺失的父目录）
//! - 逐文件转换并统计成功/失败
//! - 任一文件失败时整体以非零退出码结束
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `batch/`, `codec.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchOutcome, BatchRunner, CandidateCollector, ProcessResult};
use crate::cli::Cli;
use crate::codec;
use crate::error::{HeiconvError, Result};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行转换命令
pub fn execute(args: Cli) -> Result<()> {
    let quality = parse_quality(&args.quality)?;

    let outcome = run_batch(&args.input, &args.output, quality)?;

    if outcome.failed > 0 {
        return Err(HeiconvError::BatchFailed {
            failed: outcome.failed,
        });
    }
    Ok(())
}

/// 解析并校验质量参数
///
/// 质量校验先于任何文件系统访问。
fn parse_quality(raw: &str) -> Result<u8> {
    let quality: i64 = raw.trim().parse().map_err(|_| {
        HeiconvError::InvalidArgument(format!("Quality must be a valid integer, got '{}'", raw))
    })?;

    if !(1..=100).contains(&quality) {
        return Err(HeiconvError::InvalidArgument(format!(
            "Quality must be between 1 and 100, got {}",
            quality
        )));
    }

    Ok(quality as u8)
}

/// 执行批量转换并返回统计结果
///
/// 输入目录校验在输出目录创建之前，输入目录无效时不产生任何输出。
pub fn run_batch(input_dir: &Path, output_dir: &Path, quality: u8) -> Result<BatchOutcome> {
    output::print_header("Converting HEIC/HEIF to JPEG");

    let files = CandidateCollector::new(input_dir.to_path_buf()).collect()?;

    fs::create_dir_all(output_dir).map_err(|e| HeiconvError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No HEIC/HEIF files found in {}",
            input_dir.display()
        ));
        return Ok(BatchOutcome::default());
    }

    output::print_info(&format!(
        "Found {} HEIC/HEIF file(s) in {}",
        files.len(),
        input_dir.display()
    ));
    output::print_info(&format!("Output folder: {}", output_dir.display()));
    output::print_separator();

    let outcome = BatchRunner::run(&files, |input_path| {
        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let dest_name = format!("{}.jpg", stem);
        let output_path = output_dir.join(&dest_name);
        let source = input_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(stem)
            .to_string();

        match codec::convert_file(input_path, &output_path, quality) {
            Ok(()) => ProcessResult::Converted {
                source,
                dest: dest_name,
            },
            Err(e) => ProcessResult::Failed {
                source,
                error: e.to_string(),
            },
        }
    });

    output::print_separator();
    output::print_done(&format!(
        "Converted {} of {} file(s) to '{}' ({} failed)",
        outcome.successful,
        outcome.total(),
        output_dir.display(),
        outcome.failed
    ));

    Ok(outcome)
}
