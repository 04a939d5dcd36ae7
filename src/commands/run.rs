// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{config::SuiteMatrix, execution::run_matrix},
    infra::t,
    reporting::{console::print_summary, html::generate_html_report, json::write_report},
};

pub async fn execute(
    config: PathBuf,
    project_dir: PathBuf,
    output: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let (matrix, config_path) = setup_and_parse_config(&config)?;
    rust_i18n::set_locale(&matrix.language);

    // Reject malformed configurations before any suite executes.
    matrix.validate()?;

    let project_root = fs::canonicalize(&project_dir)
        .with_context(|| t!("project_dir_not_found", path = project_dir.display()))?;

    println!("{}", t!("loading_matrix", path = config_path.display()));
    println!(
        "{}",
        t!("project_root_detected", path = project_root.display()).cyan()
    );
    println!(
        "{}",
        t!(
            "matrix_overview",
            suites = matrix.suites.len(),
            runs = matrix.total_repetitions()
        )
        .bold()
    );
    println!();

    let report = run_matrix(&matrix.suites, &project_root).await;

    print_summary(&report);

    // The JSON artifact is the one output that must not be lost: a failure
    // here fails the whole run, while suite failures above never do.
    let destination = resolve_destination(&project_root, output.unwrap_or(matrix.output));
    write_report(&report, &destination)?;

    if let Some(html_path) = html {
        let html_destination = resolve_destination(&project_root, html_path);
        match generate_html_report(&report, &html_destination) {
            Ok(()) => println!(
                "{}",
                t!("report.html_written", path = html_destination.display())
            ),
            Err(e) => eprintln!("{} {}", t!("report.html_failed").red(), e),
        }
    }

    println!(
        "\n{}",
        t!("report.written", path = destination.display())
            .green()
            .bold()
    );
    Ok(())
}

fn setup_and_parse_config(config_path_arg: &Path) -> Result<(SuiteMatrix, PathBuf)> {
    let config_path = fs::canonicalize(config_path_arg)
        .with_context(|| t!("config_read_failed_path", path = config_path_arg.display()))?;

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| t!("config_read_failed_path", path = config_path.display()))?;

    let matrix: SuiteMatrix =
        toml::from_str(&config_content).with_context(|| t!("config_parse_failed"))?;

    Ok((matrix, config_path))
}

fn resolve_destination(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
