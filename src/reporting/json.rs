//! # JSON Report Module / JSON 报告模块
//!
//! Persists the `MatrixReport` as the durable JSON summary artifact. This is
//! the one output the whole run exists to produce: consumers (dashboards,
//! CI gates) parse it by field name, so the shape written here is a
//! stability contract.
//!
//! 将 `MatrixReport` 持久化为持久的 JSON 摘要工件。这是整个运行
//! 要产出的唯一输出：消费者（仪表盘、CI 把关）按字段名解析它，
//! 因此这里写入的结构是一项稳定性契约。

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::models::MatrixReport;
use crate::infra::fs;

/// Serializes `report` and writes it to `destination`, creating any missing
/// parent directories first. An existing file at `destination` is
/// overwritten; reports are never appended to or merged across runs.
///
/// # Errors
/// Returns an error when the directory cannot be created or the file cannot
/// be written. Callers treat this as fatal to the whole run: a lost report
/// means the entire measurement is lost.
pub fn write_report(report: &MatrixReport, destination: &Path) -> Result<()> {
    fs::ensure_parent_dir(destination)?;

    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize the reliability report")?;

    fs::write_atomic(destination, &json)?;

    Ok(())
}
