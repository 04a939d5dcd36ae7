//! # Suite Execution Engine Module / 套件执行引擎模块
//!
//! This module drives the reliability measurement: one repetition launches
//! one external process and waits for it to exit, one suite is a strictly
//! sequential series of repetitions, and the matrix is a strictly sequential
//! series of suites. There is no concurrency anywhere in this flow; suites
//! in this domain are expected to bind an ephemeral port and share a single
//! target server, so overlapping executions would interfere with each other.
//!
//! 此模块驱动可靠性测量：一次重复启动一个外部进程并等待其退出，
//! 一个套件是严格顺序的一系列重复，矩阵是严格顺序的一系列套件。
//! 此流程中没有任何并发；该领域中的套件通常会绑定临时端口并共享单个
//! 目标服务器，因此重叠执行会相互干扰。

use colored::*;
use std::path::Path;
use std::time::Instant;

use crate::{
    core::{
        config::SuiteDefinition,
        models::{MatrixReport, Outcome, SuiteResult},
    },
    infra::{command, t},
};

/// Executes one repetition of a suite command and normalizes the result.
///
/// This is the boundary where external, untrusted failure becomes a
/// two-valued outcome: a success exit status is `Passed`, and everything
/// else (non-zero exit, unparseable command, failed launch) is `Failed`.
/// No error propagates past this function. The report never distinguishes
/// "ran and failed" from "could not launch"; the console output does.
pub async fn execute_command(command_line: &str, project_root: &Path) -> Outcome {
    match command::run_passthrough(command_line, project_root).await {
        Ok(status) => {
            let outcome = Outcome::from_status(status);
            if !outcome.is_passed() {
                if let Some(code) = status.code() {
                    println!("{}", t!("run.nonzero_exit", code = code).dimmed());
                }
            }
            outcome
        }
        Err(e) => {
            println!("{}", t!("run.launch_failed", error = e).yellow());
            Outcome::Failed
        }
    }
}

/// Runs every repetition of a single suite, strictly sequentially, and
/// returns the finalized tally. Each repetition's process fully exits before
/// the next one launches. A suite configured with zero repetitions performs
/// no executions and yields an all-zero result.
///
/// 严格按顺序运行单个套件的每次重复，并返回最终统计。
/// 每次重复的进程完全退出后，下一次才会启动。
/// 配置为零次重复的套件不执行任何操作，并产生全零结果。
pub async fn run_suite(def: &SuiteDefinition, project_root: &Path) -> SuiteResult {
    let mut result = SuiteResult::new(def);

    if def.repetitions == 0 {
        println!("{}", t!("run.suite_empty", name = &def.name).dimmed());
        return result;
    }

    println!(
        "{}",
        t!("run.suite_started", name = &def.name, count = def.repetitions).bold()
    );

    for attempt in 1..=def.repetitions {
        println!(
            "{}",
            t!(
                "run.repetition_running",
                current = attempt,
                total = def.repetitions,
                name = &def.name
            )
            .blue()
        );

        let start_time = Instant::now();
        let outcome = execute_command(&def.command, project_root).await;
        let duration = format!("{:.2}", start_time.elapsed().as_secs_f64());

        match outcome {
            Outcome::Passed => println!(
                "{}",
                t!(
                    "run.repetition_passed",
                    current = attempt,
                    total = def.repetitions,
                    name = &def.name,
                    duration = duration
                )
                .green()
            ),
            Outcome::Failed => println!(
                "{}",
                t!(
                    "run.repetition_failed",
                    current = attempt,
                    total = def.repetitions,
                    name = &def.name,
                    duration = duration
                )
                .red()
            ),
        }

        result.record(outcome);
    }

    result
}

/// Runs the whole matrix: every suite in the given order, one after another.
///
/// A suite with failures never prevents later suites from running; the
/// coordinator's job is measurement, not gating. The report preserves the
/// input order regardless of outcomes.
///
/// 运行整个矩阵：按给定顺序逐个运行每个套件。
///
/// 有失败的套件不会阻止后续套件运行；协调器的职责是测量而非把关。
/// 无论结果如何，报告都保留输入顺序。
pub async fn run_matrix(suites: &[SuiteDefinition], project_root: &Path) -> MatrixReport {
    let mut report = MatrixReport::default();

    for def in suites {
        let result = run_suite(def, project_root).await;

        let finished = t!(
            "run.suite_finished",
            name = &def.name,
            passes = result.passes,
            runs = result.runs
        );
        if result.is_fully_passing() {
            println!("{}\n", finished.green());
        } else {
            println!("{}\n", finished.red());
        }

        report.push(result);
    }

    report
}
