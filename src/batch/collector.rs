//! # 候选文件收集器
//!
//! 在输入目录顶层收集扩展名为 `.heic`/`.heif` 的常规文件。
//!
//! ## 功能
//! - 扩展名大小写不敏感匹配
//! - 不递归子目录
//! - 按文件名字典序排序，保证处理顺序确定
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{HeiconvError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// HEIC/HEIF 扩展名列表（小写比较）
const HEIF_EXTENSIONS: [&str; 2] = ["heic", "heif"];

/// 候选文件收集器
pub struct CandidateCollector {
    /// 输入目录
    input: PathBuf,
}

impl CandidateCollector {
    /// 创建新的候选文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 收集所有候选文件
    ///
    /// 输入路径不存在或不是目录时返回错误。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.exists() {
            return Err(HeiconvError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }
        if !self.input.is_dir() {
            return Err(HeiconvError::NotADirectory {
                path: self.input.display().to_string(),
            });
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::is_heif_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 检查扩展名是否为 HEIC/HEIF（大小写不敏感）
    fn is_heif_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                HEIF_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_heif_file_case_insensitive() {
        assert!(CandidateCollector::is_heif_file(Path::new("IMG.HEIC")));
        assert!(CandidateCollector::is_heif_file(Path::new("img.heic")));
        assert!(CandidateCollector::is_heif_file(Path::new("img.Heic")));
        assert!(CandidateCollector::is_heif_file(Path::new("img.HEIF")));
        assert!(!CandidateCollector::is_heif_file(Path::new("img.jpg")));
        assert!(!CandidateCollector::is_heif_file(Path::new("notes.txt")));
        assert!(!CandidateCollector::is_heif_file(Path::new("heic")));
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.HEIF", "a.heic", "c.Heic", "notes.txt", "photo.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = CandidateCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.heic", "b.HEIF", "c.Heic"]);
    }

    #[test]
    fn test_collect_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.heic"), b"x").unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.heic"), b"x").unwrap();

        let files = CandidateCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.heic"));
    }

    #[test]
    fn test_collect_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = CandidateCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = CandidateCollector::new(dir.path().join("absent"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, HeiconvError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_collect_input_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.heic");
        fs::write(&file, b"x").unwrap();

        let err = CandidateCollector::new(file).collect().unwrap_err();
        assert!(matches!(err, HeiconvError::NotADirectory { .. }));
    }
}
