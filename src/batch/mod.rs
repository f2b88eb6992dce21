//! # 批量处理模块
//!
//! 提供候选文件收集与顺序批量执行能力。
//!
//! ## 功能
//! - 收集输入目录顶层的 HEIC/HEIF 文件
//! - 按列表顺序逐个处理
//! - 进度反馈与成功/失败统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::CandidateCollector;
pub use runner::{BatchOutcome, BatchRunner, ProcessResult};
