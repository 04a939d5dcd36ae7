//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the
//! reliability matrix: the two-valued outcome of a single repetition, the
//! per-suite tally, and the final report artifact.
//!
//! 此模块定义了整个可靠性矩阵中使用的核心数据结构：
//! 单次重复的二值结果、每个套件的统计，以及最终的报告工件。

use crate::core::config::SuiteDefinition;
use serde::{Deserialize, Serialize};
use std::process::ExitStatus;

/// The two-valued classification of one repetition of a suite.
/// A non-zero exit status and a failure to launch the process both collapse
/// to `Failed`; the report format does not distinguish them.
/// 套件单次重复的二值分类。
/// 非零退出状态和进程启动失败都折叠为 `Failed`；报告格式不区分它们。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    /// The suite command terminated with a success exit status.
    /// 套件命令以成功退出状态终止。
    Passed,
    /// The suite command exited non-zero, or could not be launched at all.
    /// 套件命令以非零状态退出，或者根本无法启动。
    Failed,
}

impl Outcome {
    /// Classifies a process exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    pub fn is_passed(self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// The aggregate tally for one suite across all of its repetitions.
/// The field names and types are a stability contract for report consumers;
/// `passes + failures == runs` holds at every point because all three
/// counters advance together when an outcome is recorded.
///
/// 一个套件在其所有重复中的汇总统计。
/// 字段名称和类型是面向报告消费者的稳定性契约；
/// 由于记录结果时三个计数器一起推进，`passes + failures == runs` 始终成立。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteResult {
    /// The suite name, copied from the definition. / 套件名称，从定义中复制。
    pub name: String,
    /// The suite command, copied from the definition. / 套件命令，从定义中复制。
    pub command: String,
    /// The number of repetitions executed so far. / 到目前为止执行的重复次数。
    pub runs: u32,
    /// How many repetitions passed. / 通过的重复次数。
    pub passes: u32,
    /// How many repetitions failed. / 失败的重复次数。
    pub failures: u32,
}

impl SuiteResult {
    /// Creates an all-zero tally for the given suite definition.
    pub fn new(def: &SuiteDefinition) -> Self {
        Self {
            name: def.name.clone(),
            command: def.command.clone(),
            runs: 0,
            passes: 0,
            failures: 0,
        }
    }

    /// Records the outcome of one completed repetition.
    pub fn record(&mut self, outcome: Outcome) {
        self.runs += 1;
        match outcome {
            Outcome::Passed => self.passes += 1,
            Outcome::Failed => self.failures += 1,
        }
    }

    /// The fraction of runs that passed, or `None` for a zero-repetition suite.
    pub fn pass_rate(&self) -> Option<f64> {
        if self.runs == 0 {
            None
        } else {
            Some(f64::from(self.passes) / f64::from(self.runs))
        }
    }

    /// `true` if no repetition failed. A zero-repetition suite counts as fully passing.
    pub fn is_fully_passing(&self) -> bool {
        self.failures == 0
    }
}

/// The final artifact of one orchestrator run: an ordered sequence of
/// `SuiteResult`, matching suite-definition order. It serializes
/// transparently as a JSON array, which is the on-disk report format.
///
/// 一次编排器运行的最终工件：与套件定义顺序一致的 `SuiteResult` 有序序列。
/// 它透明地序列化为 JSON 数组，即磁盘上的报告格式。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixReport {
    pub suites: Vec<SuiteResult>,
}

impl MatrixReport {
    /// Appends a finalized suite result, preserving insertion order.
    pub fn push(&mut self, result: SuiteResult) {
        self.suites.push(result);
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SuiteResult> {
        self.suites.iter()
    }

    pub fn total_runs(&self) -> u64 {
        self.suites.iter().map(|s| u64::from(s.runs)).sum()
    }

    pub fn total_passes(&self) -> u64 {
        self.suites.iter().map(|s| u64::from(s.passes)).sum()
    }

    pub fn total_failures(&self) -> u64 {
        self.suites.iter().map(|s| u64::from(s.failures)).sum()
    }

    /// `true` if no repetition of any suite failed.
    pub fn is_fully_passing(&self) -> bool {
        self.suites.iter().all(SuiteResult::is_fully_passing)
    }
}
