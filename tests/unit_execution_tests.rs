//! # Execution Engine Unit Tests / 执行引擎单元测试
//!
//! These tests exercise the sequential execution engine against real
//! external commands: an always-succeeding command, an always-failing
//! command, and a command that cannot be launched at all.
//!
//! 这些测试针对真实的外部命令运行顺序执行引擎：
//! 始终成功的命令、始终失败的命令，以及根本无法启动的命令。

mod common;

use common::{failing_command, missing_command, passing_command};
use reliability_matrix::core::config::SuiteDefinition;
use reliability_matrix::core::execution::{execute_command, run_matrix, run_suite};
use reliability_matrix::core::models::Outcome;
use std::path::{Path, PathBuf};

fn suite(name: &str, command: &str, repetitions: u32) -> SuiteDefinition {
    SuiteDefinition {
        name: name.to_string(),
        command: command.to_string(),
        repetitions,
    }
}

fn cwd() -> PathBuf {
    std::env::current_dir().expect("current dir")
}

#[cfg(test)]
mod execute_command_tests {
    use super::*;

    #[tokio::test]
    async fn test_success_exit_status_is_passed() {
        let outcome = execute_command(passing_command(), &cwd()).await;
        assert_eq!(outcome, Outcome::Passed);
    }

    #[tokio::test]
    async fn test_nonzero_exit_status_is_failed() {
        let outcome = execute_command(failing_command(), &cwd()).await;
        assert_eq!(outcome, Outcome::Failed);
    }

    #[tokio::test]
    async fn test_launch_failure_collapses_to_failed() {
        // A command that cannot even start is tallied exactly like a
        // command that ran and failed.
        let outcome = execute_command(missing_command(), &cwd()).await;
        assert_eq!(outcome, Outcome::Failed);
    }

    #[tokio::test]
    async fn test_unparseable_command_collapses_to_failed() {
        // An unterminated quote cannot be split into an argv.
        let outcome = execute_command("echo \"unterminated", &cwd()).await;
        assert_eq!(outcome, Outcome::Failed);
    }
}

#[cfg(test)]
mod run_suite_tests {
    use super::*;

    #[tokio::test]
    async fn test_always_passing_suite() {
        let def = suite("always-pass", passing_command(), 5);
        let result = run_suite(&def, &cwd()).await;

        assert_eq!(result.name, "always-pass");
        assert_eq!(result.command, def.command);
        assert_eq!(result.runs, 5);
        assert_eq!(result.passes, 5);
        assert_eq!(result.failures, 0);
    }

    #[tokio::test]
    async fn test_always_failing_suite() {
        let def = suite("always-fail", failing_command(), 3);
        let result = run_suite(&def, &cwd()).await;

        assert_eq!(result.runs, 3);
        assert_eq!(result.passes, 0);
        assert_eq!(result.failures, 3);
    }

    #[tokio::test]
    async fn test_zero_repetition_suite_never_launches() {
        // The command does not exist; if it were launched even once the
        // failure would show up in the tallies.
        let def = suite("disabled", missing_command(), 0);
        let result = run_suite(&def, &cwd()).await;

        assert_eq!(result.runs, 0);
        assert_eq!(result.passes, 0);
        assert_eq!(result.failures, 0);
    }

    #[tokio::test]
    async fn test_tally_invariant_holds_for_mixed_outcomes() {
        let def = suite("unlaunchable", missing_command(), 4);
        let result = run_suite(&def, &cwd()).await;

        assert_eq!(result.runs, 4);
        assert_eq!(result.passes + result.failures, result.runs);
    }
}

#[cfg(test)]
mod run_matrix_tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_suite_does_not_stop_later_suites() {
        let suites = vec![
            suite("always-fail", failing_command(), 2),
            suite("always-pass", passing_command(), 2),
        ];

        let report = run_matrix(&suites, &cwd()).await;

        assert_eq!(report.len(), 2);
        assert_eq!(report.suites[0].name, "always-fail");
        assert_eq!(report.suites[0].failures, 2);
        assert_eq!(report.suites[1].name, "always-pass");
        assert_eq!(report.suites[1].passes, 2);
    }

    #[tokio::test]
    async fn test_report_order_matches_definition_order() {
        let suites = vec![
            suite("c", passing_command(), 1),
            suite("a", failing_command(), 1),
            suite("b", passing_command(), 0),
        ];

        let report = run_matrix(&suites, &cwd()).await;

        let names: Vec<&str> = report.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_matrix_yields_empty_report() {
        let report = run_matrix(&[], Path::new(".")).await;
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_runs_equal_configured_repetitions() {
        let suites = vec![
            suite("five", passing_command(), 5),
            suite("zero", passing_command(), 0),
            suite("three", failing_command(), 3),
        ];

        let report = run_matrix(&suites, &cwd()).await;

        for (def, result) in suites.iter().zip(report.iter()) {
            assert_eq!(result.runs, def.repetitions);
            assert_eq!(result.passes + result.failures, result.runs);
        }
    }
}
