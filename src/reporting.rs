//! # Reporting Module / 报告模块
//!
//! This module renders and persists the reliability report: the JSON summary
//! artifact, the console summary table, and the optional HTML report.
//!
//! 此模块渲染并持久化可靠性报告：JSON 摘要工件、
//! 控制台摘要表格以及可选的 HTML 报告。

pub mod console;
pub mod html;
pub mod json;
