//! # 顺序批量执行器
//!
//! 按列表顺序逐个处理文件，输出每个文件的成功/失败行并汇总统计。
//!
//! ## 功能
//! - 严格顺序处理，无并行
//! - 进度条显示
//! - 逐文件结果打印与统计合并
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印结果

use crate::utils::{output, progress};

use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 转换成功
    Converted {
        /// 源文件名
        source: String,
        /// 目标文件名
        dest: String,
    },
    /// 转换失败
    Failed {
        /// 源文件名
        source: String,
        /// 错误信息
        error: String,
    },
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功数量
    pub successful: usize,
    /// 失败数量
    pub failed: usize,
}

impl BatchOutcome {
    /// 合并处理结果
    pub fn merge(&mut self, result: &ProcessResult) {
        match result {
            ProcessResult::Converted { .. } => self.successful += 1,
            ProcessResult::Failed { .. } => self.failed += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}

/// 顺序批量执行器
pub struct BatchRunner;

impl BatchRunner {
    /// 按顺序处理文件列表
    pub fn run<F>(files: &[PathBuf], processor: F) -> BatchOutcome
    where
        F: Fn(&PathBuf) -> ProcessResult,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Converting");
        let mut outcome = BatchOutcome::default();

        for file in files {
            let result = processor(file);

            pb.suspend(|| match &result {
                ProcessResult::Converted { source, dest } => {
                    output::print_conversion(source, dest);
                }
                ProcessResult::Failed { source, error } => {
                    output::print_error(&format!("{}: {}", source, error));
                }
            });

            outcome.merge(&result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_merge() {
        let mut outcome = BatchOutcome::default();
        outcome.merge(&ProcessResult::Converted {
            source: "a.heic".to_string(),
            dest: "a.jpg".to_string(),
        });
        outcome.merge(&ProcessResult::Failed {
            source: "b.heic".to_string(),
            error: "corrupt".to_string(),
        });
        outcome.merge(&ProcessResult::Converted {
            source: "c.heif".to_string(),
            dest: "c.jpg".to_string(),
        });

        assert_eq!(outcome.successful, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.total(), 3);
    }

    #[test]
    fn test_run_preserves_listing_order() {
        let files = vec![
            PathBuf::from("a.heic"),
            PathBuf::from("b.heic"),
            PathBuf::from("c.heic"),
        ];
        let seen = std::cell::RefCell::new(Vec::new());

        let outcome = BatchRunner::run(&files, |file| {
            seen.borrow_mut().push(file.clone());
            ProcessResult::Failed {
                source: file.display().to_string(),
                error: "stub".to_string(),
            }
        });

        assert_eq!(*seen.borrow(), files);
        assert_eq!(outcome.failed, 3);
        assert_eq!(outcome.successful, 0);
    }

    #[test]
    fn test_run_empty_list() {
        let outcome = BatchRunner::run(&[], |_| ProcessResult::Failed {
            source: String::new(),
            error: String::new(),
        });
        assert_eq!(outcome.total(), 0);
    }
}
