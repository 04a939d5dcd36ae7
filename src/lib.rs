//! # Reliability Matrix Library / Reliability Matrix 库
//!
//! This library provides the core functionality for the Reliability Matrix tool,
//! a configuration-driven orchestrator that repeatedly runs black-box test
//! suites and aggregates their pass/fail tallies into a reliability report.
//!
//! 此库为 Reliability Matrix 工具提供核心功能，
//! 这是一个配置驱动的编排器，它反复运行黑盒测试套件，
//! 并将其通过/失败统计汇总为可靠性报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models and the suite execution engine
//! - `infra` - Infrastructure services like command launching and file system operations
//! - `reporting` - Report serialization and console/HTML rendering
//! - `cli` - Command-line interface
//! - `commands` - Subcommand implementations
//!
//! - `core` - 核心数据模型和套件执行引擎
//! - `infra` - 基础设施服务，如命令启动和文件系统操作
//! - `reporting` - 报告序列化以及控制台/HTML 渲染
//! - `cli` - 命令行接口
//! - `commands` - 子命令实现

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::execution;
pub use core::models;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
