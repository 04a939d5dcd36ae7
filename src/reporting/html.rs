//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of the optional HTML report.
//! It creates a self-contained, styled HTML file with summary statistics
//! and a per-suite results table.
//!
//! 此模块处理可选 HTML 报告的生成。
//! 它创建一个自包含的、带样式的 HTML 文件，包含摘要统计和每个套件的结果表格。

use anyhow::Result;
use std::path::Path;

use crate::core::models::MatrixReport;
use crate::infra::{fs, t};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Generates a self-contained HTML report from the matrix results.
///
/// 从矩阵结果生成自包含的 HTML 报告。
///
/// # Arguments / 参数
/// * `report` - The finalized matrix report / 最终的矩阵报告
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written
/// to the specified path.
/// 如果无法将输出文件写入指定路径，此函数会返回错误。
pub fn generate_html_report(report: &MatrixReport, output_path: &Path) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>",
        t!("html_report.title")
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!("<h1>{}</h1>", t!("html_report.main_header")));

    // Summary statistics
    html.push_str("<div class='summary-container'>");
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        report.len(),
        t!("html_report.summary.suites")
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count'>{}</span><span class='label'>{}</span></div>",
        report.total_runs(),
        t!("html_report.summary.runs")
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count passed-text'>{}</span><span class='label'>{}</span></div>",
        report.total_passes(),
        t!("html_report.summary.passes")
    ));
    html.push_str(&format!(
        "<div class='summary-item'><span class='count failed-text'>{}</span><span class='label'>{}</span></div>",
        report.total_failures(),
        t!("html_report.summary.failures")
    ));
    html.push_str("</div>");

    // Results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!("<th>{}</th>", t!("html_report.table.header.name")));
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.command")
    ));
    html.push_str(&format!(
        "<th class='num-col'>{}</th>",
        t!("html_report.table.header.runs")
    ));
    html.push_str(&format!(
        "<th class='num-col'>{}</th>",
        t!("html_report.table.header.passes")
    ));
    html.push_str(&format!(
        "<th class='num-col'>{}</th>",
        t!("html_report.table.header.failures")
    ));
    html.push_str(&format!(
        "<th class='num-col'>{}</th>",
        t!("html_report.table.header.rate")
    ));
    html.push_str("</tr></thead><tbody>");

    for result in report.iter() {
        let status_class = if result.runs == 0 {
            "status-Empty"
        } else if result.is_fully_passing() {
            "status-Passing"
        } else if result.passes == 0 {
            "status-Failing"
        } else {
            "status-Flaky"
        };

        let rate = match result.pass_rate() {
            Some(rate) => format!("{:.1}%", rate * 100.0),
            None => "&ndash;".to_string(),
        };

        html.push_str(&format!("<tr class='{}'>", status_class));
        html.push_str(&format!("<td>{}</td>", escape_html(&result.name)));
        html.push_str(&format!(
            "<td><code>{}</code></td>",
            escape_html(&result.command)
        ));
        html.push_str(&format!("<td class='num-col'>{}</td>", result.runs));
        html.push_str(&format!("<td class='num-col'>{}</td>", result.passes));
        html.push_str(&format!("<td class='num-col'>{}</td>", result.failures));
        html.push_str(&format!("<td class='num-col'>{}</td>", rate));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html.push_str(&format!(
        "<p class='footer'>{}</p>",
        t!(
            "html_report.generated_at",
            timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));
    html.push_str("</body></html>");

    fs::ensure_parent_dir(output_path)?;
    fs::write_atomic(output_path, &html)?;
    Ok(())
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
