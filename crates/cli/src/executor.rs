use crate::error::CliError;
use std::process::ExitStatus;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Runs translated commands one after another through `<shell> -c`.
pub struct CommandExecutor {
    shell: String,
    dry_run: bool,
    cancel: CancellationToken,
}

impl CommandExecutor {
    pub fn new(shell: impl Into<String>, dry_run: bool, cancel: CancellationToken) -> Self {
        Self {
            shell: shell.into(),
            dry_run,
            cancel,
        }
    }

    /// Executes `commands` in order and stops at the first failure.
    /// Returns how many commands completed.
    pub async fn run_all(&self, commands: &[String]) -> Result<usize, CliError> {
        let total = commands.len();

        for (idx, command) in commands.iter().enumerate() {
            if self.cancel.is_cancelled() {
                warn!(
                    "Shutdown requested before command {}/{}: {}",
                    idx + 1,
                    total,
                    command
                );
                return Err(CliError::ShutdownRequested);
            }

            if self.dry_run {
                info!("[dry-run] Command {}/{}", idx + 1, total);
                println!("{command}");
                continue;
            }

            info!("Executing command {}/{}: {}", idx + 1, total, command);
            self.run(command).await?;
        }

        info!("Completed {} command(s)", total);
        Ok(total)
    }

    /// Runs a single command; a nonzero exit is an error.
    pub async fn run(&self, command: &str) -> Result<(), CliError> {
        let status = self.spawn_and_wait(command).await?;

        if status.success() {
            return Ok(());
        }

        // Signalled children have no exit code
        let code = status.code().unwrap_or(-1);
        error!("Command exited with status {}: {}", code, command);
        Err(CliError::CommandFailed {
            command: command.to_string(),
            status: code,
        })
    }

    async fn spawn_and_wait(&self, command: &str) -> Result<ExitStatus, CliError> {
        let spawn_error = |source: std::io::Error| CliError::Spawn {
            command: command.to_string(),
            source,
        };

        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        let outcome = tokio::select! {
            status = child.wait() => Some(status),
            _ = self.cancel.cancelled() => None,
        };

        match outcome {
            Some(status) => status.map_err(spawn_error),
            None => {
                warn!("Shutdown requested, terminating: {}", command);
                if let Err(e) = child.kill().await {
                    error!("Failed to terminate '{}': {}", command, e);
                }
                Err(CliError::ShutdownRequested)
            }
        }
    }
}
