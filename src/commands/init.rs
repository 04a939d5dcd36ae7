//! # Matrix Initialization Module / 矩阵初始化模块
//!
//! This module provides functionality for initializing a new reliability
//! matrix configuration through an interactive command-line wizard. It helps
//! users create a `ReliabilityMatrix.toml` file describing the suites to
//! measure.
//!
//! 此模块通过交互式命令行向导提供初始化新可靠性矩阵配置的功能。
//! 它帮助用户创建一个描述待测量套件的 `ReliabilityMatrix.toml` 文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{SuiteDefinition, SuiteMatrix};
use crate::infra::t;

/// Runs the interactive wizard to generate a `ReliabilityMatrix.toml` file.
///
/// The wizard collects one suite at a time (name, command, repetitions)
/// until the user stops adding more. With `non_interactive`, a default
/// configuration is written without any prompts.
///
/// 运行交互式向导以生成 `ReliabilityMatrix.toml` 文件。
///
/// 向导逐个收集套件（名称、命令、重复次数），直到用户停止添加。
/// 使用 `non_interactive` 时，将在没有任何提示的情况下写入默认配置。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("ReliabilityMatrix.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!(
            "\n{}",
            t!("init_wizard_welcome", locale = language).cyan().bold()
        );
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init_overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        return write_config(config_path, &default_matrix(language), language);
    }

    let mut suites = Vec::new();
    loop {
        let name: String = Input::with_theme(&theme)
            .with_prompt(t!("init_suite_name_prompt", locale = language).to_string())
            .interact_text()?;

        let command: String = Input::with_theme(&theme)
            .with_prompt(t!("init_suite_command_prompt", locale = language).to_string())
            .interact_text()?;

        let repetitions: u32 = Input::with_theme(&theme)
            .with_prompt(t!("init_suite_repetitions_prompt", locale = language).to_string())
            .default(3)
            .interact_text()?;

        suites.push(SuiteDefinition {
            name,
            command,
            repetitions,
        });

        let add_another = Confirm::with_theme(&theme)
            .with_prompt(t!("init_add_another_prompt", locale = language).to_string())
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !add_another {
            break;
        }
    }

    let final_matrix = if suites.is_empty() {
        default_matrix(language)
    } else {
        SuiteMatrix {
            language: language.to_string(),
            suites,
            ..SuiteMatrix::default()
        }
    };

    write_config(config_path, &final_matrix, language)
}

fn default_matrix(language: &str) -> SuiteMatrix {
    SuiteMatrix {
        language: language.to_string(),
        suites: vec![SuiteDefinition {
            name: "smoke".to_string(),
            command: "echo reliability-smoke".to_string(),
            repetitions: 3,
        }],
        ..SuiteMatrix::default()
    }
}

fn write_config(path: &Path, matrix: &SuiteMatrix, language: &str) -> Result<()> {
    // The wizard can produce duplicates; hold it to the same rules as `run`.
    matrix.validate()?;

    let toml_string = toml::to_string_pretty(matrix)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()))?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
