//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the final reliability summary to the console:
//! one row per suite with its tallies and pass rate, followed by totals,
//! using color coding to highlight fully passing and failing suites.
//!
//! 此模块将最终的可靠性摘要打印到控制台：
//! 每个套件一行，包含其统计和通过率，随后是总计，
//! 使用颜色编码突出显示完全通过和失败的套件。

use colored::*;

use crate::core::models::{MatrixReport, SuiteResult};
use crate::infra::t;

/// Formats a pass rate for display. Zero-repetition suites have no rate.
fn format_rate(result: &SuiteResult) -> String {
    match result.pass_rate() {
        Some(rate) => format!("{:>5.1}%", rate * 100.0),
        None => "   --".to_string(),
    }
}

/// Prints a formatted summary of the whole matrix to the console.
///
/// # Output Format / 输出格式
/// ```text
/// --- Reliability Summary ---
///   - cypress-human          |  3 runs |  3 passed |  0 failed | 100.0%
///   - pw-ai                  |  3 runs |  1 passed |  2 failed |  33.3%
/// Totals: 2 suite(s), 6 run(s), 4 passed, 2 failed
/// ```
pub fn print_summary(report: &MatrixReport) {
    println!("\n{}", t!("report.summary_banner").bold());

    for result in report.iter() {
        let row = format!(
            "  - {:<24} | {:>2} runs | {:>2} passed | {:>2} failed | {}",
            result.name,
            result.runs,
            result.passes,
            result.failures,
            format_rate(result)
        );

        if result.runs == 0 {
            println!("{}", row.dimmed());
        } else if result.is_fully_passing() {
            println!("{}", row.green());
        } else if result.passes == 0 {
            println!("{}", row.red());
        } else {
            println!("{}", row.yellow());
        }
    }

    println!(
        "{}",
        t!(
            "report.totals",
            suites = report.len(),
            runs = report.total_runs(),
            passes = report.total_passes(),
            failures = report.total_failures()
        )
        .bold()
    );

    if report.is_fully_passing() {
        println!("{}", t!("report.all_passed").green());
    } else {
        println!(
            "{}",
            t!("report.some_failed", failures = report.total_failures()).yellow()
        );
    }
}
