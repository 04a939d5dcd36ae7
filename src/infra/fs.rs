//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as creating report directories and writing files atomically.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如创建报告目录和原子地写入文件。

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Creates the parent directory of `path`, including intermediate
/// directories. Idempotent: an already-existing directory is not an error.
///
/// # Arguments
/// * `path` - The file path whose parent directory must exist
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

/// Writes `contents` to `path` through a temporary file in the same
/// directory followed by a rename, so a reader never observes a partially
/// written file. Overwrites any pre-existing file at `path`.
///
/// 通过同一目录中的临时文件加重命名将 `contents` 写入 `path`，
/// 因此读者永远不会观察到部分写入的文件。会覆盖 `path` 处已存在的文件。
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).with_context(|| {
        format!("Failed to create temporary file in: {}", parent.display())
    })?;

    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write report contents for: {}", path.display()))?;

    tmp.persist(path)
        .with_context(|| format!("Failed to persist report file: {}", path.display()))?;

    Ok(())
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
