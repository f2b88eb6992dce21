//! # 统一错误处理模块
//!
//! 定义 Heiconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Heiconv 统一错误类型
#[derive(Error, Debug)]
pub enum HeiconvError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Input path is not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode HEIF image: {path}\nReason: {reason}")]
    DecodeError { path: String, reason: String },

    #[error("Failed to encode JPEG: {path}\nReason: {reason}")]
    EncodeError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 批量结果
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} file(s) failed to convert")]
    BatchFailed { failed: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HeiconvError>;
