//! # Core Module / 核心模块
//!
//! This module contains the data models, configuration structures and the
//! sequential execution engine of the reliability matrix.
//!
//! 此模块包含可靠性矩阵的数据模型、配置结构和顺序执行引擎。

pub mod config;
pub mod execution;
pub mod models;
