use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Represents a single suite defined in the reliability matrix configuration.
/// Each `SuiteDefinition` names one independently invocable, black-box test
/// command together with the number of times it should be executed.
/// 代表可靠性矩阵配置中定义的单个套件。
/// 每个 `SuiteDefinition` 命名一个可独立调用的黑盒测试命令，
/// 以及它应被执行的次数。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuiteDefinition {
    /// The unique name for the suite, used for identification in logs and in the report.
    /// 套件的唯一名称，用于在日志和报告中进行识别。
    pub name: String,
    /// The shell-style command line that launches the suite. The orchestrator
    /// never parses its internal syntax; only the exit status is observed.
    /// 启动套件的 shell 风格命令行。编排器不会解析其内部语法；
    /// 仅观察退出状态。
    pub command: String,
    /// How many times the suite is executed. Zero is permitted and yields an
    /// all-zero tally without ever launching the command.
    /// 套件被执行的次数。允许为零，此时不会启动命令，统计全部为零。
    pub repetitions: u32,
}

/// Represents the entire reliability matrix configuration, loaded from a TOML file.
/// It contains global settings and the ordered list of suites to measure.
/// 代表从 TOML 文件加载的整个可靠性矩阵配置。
/// 它包含全局设置和要测量的套件的有序列表。
#[derive(Debug, Deserialize, Serialize)]
pub struct SuiteMatrix {
    /// The language for the orchestrator's own output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 编排器自身输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The destination path for the JSON summary report. Relative paths are
    /// resolved against the working directory the suites run in.
    /// JSON 摘要报告的目标路径。相对路径相对于套件运行的工作目录解析。
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// The ordered list of suites. Execution order and report order both
    /// follow this list.
    /// 套件的有序列表。执行顺序和报告顺序都遵循此列表。
    #[serde(default)]
    pub suites: Vec<SuiteDefinition>,
}

impl Default for SuiteMatrix {
    fn default() -> Self {
        Self {
            language: default_language(),
            output: default_output(),
            suites: Vec::new(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("evaluation/runs/summary.json")
}

impl SuiteMatrix {
    /// Validates the configuration eagerly, before any suite executes.
    /// Duplicate names, empty names and blank commands are configuration
    /// errors, not runtime conditions to recover from.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for suite in &self.suites {
            if suite.name.trim().is_empty() {
                bail!("Suite names must be non-empty.");
            }
            if suite.command.trim().is_empty() {
                bail!("Suite '{}' has a blank command.", suite.name);
            }
            if !seen.insert(suite.name.as_str()) {
                bail!("Duplicate suite name: '{}'.", suite.name);
            }
        }
        Ok(())
    }

    /// Total number of repetitions across all suites.
    pub fn total_repetitions(&self) -> u64 {
        self.suites.iter().map(|s| u64::from(s.repetitions)).sum()
    }
}
