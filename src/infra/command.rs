use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitStatus;

/// Launches a shell-style command line and waits for it to terminate.
/// The child inherits the orchestrator's stdout and stderr, so an operator
/// watching the run sees the suite's own output live; nothing is buffered
/// or re-emitted.
///
/// # Arguments
/// * `command_line` - The command to run, in shell-invocable form.
/// * `project_root` - The directory the command is launched from.
///
/// # Returns
/// The child's `ExitStatus`, or an error if the command could not be
/// expanded, parsed, or launched.
///
/// 启动一个 shell 风格的命令行并等待其终止。
/// 子进程继承编排器的 stdout 和 stderr，因此观察运行的操作者可以
/// 实时看到套件自身的输出；没有任何内容被缓冲或重新发出。
///
/// # Arguments
/// * `command_line` - 要运行的命令，为 shell 可调用形式。
/// * `project_root` - 启动命令时所在的目录。
///
/// # Returns
/// 子进程的 `ExitStatus`；如果命令无法展开、解析或启动，则返回错误。
pub async fn run_passthrough(command_line: &str, project_root: &Path) -> Result<ExitStatus> {
    let expanded = shellexpand::full(command_line)
        .with_context(|| format!("Failed to expand command: {command_line}"))?
        .to_string();

    let parts = shlex::split(&expanded)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded))?;

    if parts.is_empty() {
        return Err(anyhow::anyhow!("Empty command after parsing."));
    }

    let program = &parts[0];
    let args = &parts[1..];

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(args).kill_on_drop(true).current_dir(project_root);

    // `status()` leaves the standard streams inherited and blocks until exit.
    // `status()` 保持标准流继承，并阻塞直到退出。
    let status = cmd
        .status()
        .await
        .with_context(|| format!("Failed to launch command: {}", expanded))?;

    Ok(status)
}
