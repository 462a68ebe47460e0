//! Process execution for the external `vata` binary
//!
//! One child process per call. Arguments go straight to the program with
//! no shell in between, stdin is closed and stdout is always captured.

use crate::result::ExecutionResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command as ProcessCommand;
use vata_core::{CodedEnum, Command};
use vata_core_types::RequestId;
use vata_errors::{io_error, ExError, Result, VataError};
use vata_logging::{log_op_end, log_op_error, log_op_start};

/// What happens to the tool's stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StderrMode {
    /// Collected into [`ExecutionResult::stderr`]
    #[default]
    Capture,
    /// Passed through to the caller's stderr; the result field stays `None`
    Inherit,
}

/// Runs argument vectors against a configured `vata` binary
#[derive(Debug, Clone)]
pub struct Executor {
    program: PathBuf,
    timeout: Option<Duration>,
    stderr: StderrMode,
}

impl Executor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            stderr: StderrMode::default(),
        }
    }

    /// Default timeout applied when a call does not pass its own
    ///
    /// A zero duration, here or per call, means no timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_stderr(mut self, mode: StderrMode) -> Self {
        self.stderr = mode;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn stderr_mode(&self) -> StderrMode {
        self.stderr
    }

    /// Run `args` and wait for the process to exit
    ///
    /// A program that cannot be started is reported as an `Ok` result with
    /// no exit status and the OS error text in stderr.
    ///
    /// # Errors
    ///
    /// `ERR_TIMEOUT` if the effective timeout expires (the child is killed and
    /// partial output dropped), `ERR_IO` if waiting on the child fails.
    pub async fn run(&self, args: &[String], timeout: Option<Duration>) -> Result<ExecutionResult> {
        self.run_inner(None, args, timeout).await
    }

    /// Serialize `command` and [`run`](Self::run) it
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn run_command(
        &self,
        command: &Command,
        timeout: Option<Duration>,
    ) -> Result<ExecutionResult> {
        let operation = command.operation().token();
        self.run_inner(Some(operation), &command.to_args(), timeout)
            .await
    }

    /// Blocking form of [`run`](Self::run)
    ///
    /// Drives the call on a private current-thread runtime.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run), plus `ERR_INTERNAL` when called from inside
    /// a tokio runtime (use `run` there).
    pub fn execute(&self, args: &[String], timeout: Option<Duration>) -> Result<ExecutionResult> {
        block_on(self.run_inner(None, args, timeout))?
    }

    /// Blocking form of [`run_command`](Self::run_command)
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn execute_command(
        &self,
        command: &Command,
        timeout: Option<Duration>,
    ) -> Result<ExecutionResult> {
        block_on(self.run_command(command, timeout))?
    }

    async fn run_inner(
        &self,
        operation: Option<&str>,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ExecutionResult> {
        let request_id = RequestId::new();
        let operation = operation.unwrap_or("-");
        // A zero limit disables the timeout.
        let timeout = timeout.or(self.timeout).filter(|t| !t.is_zero());
        let start = Instant::now();

        log_op_start!(
            "execute",
            request_id = %request_id,
            operation = operation,
            program = %self.program.display(),
            argc = args.len()
        );
        tracing::debug!(request_id = %request_id, args = ?args, "vata argument vector");

        let mut process = ProcessCommand::new(&self.program);
        process
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(match self.stderr {
                StderrMode::Capture => Stdio::piped(),
                StderrMode::Inherit => Stdio::inherit(),
            })
            .kill_on_drop(true);

        let child = match process.spawn() {
            Ok(child) => child,
            Err(e) => {
                let err = VataError::Spawn {
                    program: self.program.display().to_string(),
                    reason: e.to_string(),
                };
                log_op_error!(
                    "execute",
                    err.clone(),
                    duration_ms = elapsed_ms(start),
                    request_id = %request_id,
                    operation = operation
                );
                return Ok(ExecutionResult::spawn_failure(err.to_string()));
            }
        };

        let waited = match timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(waited) => waited,
                Err(_) => {
                    // Dropping the wait future drops the child, which kills it.
                    let err = VataError::Timeout {
                        timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    };
                    log_op_error!(
                        "execute",
                        err.clone(),
                        duration_ms = elapsed_ms(start),
                        request_id = %request_id,
                        operation = operation
                    );
                    return Err(ExError::from(err).with_operation(operation));
                }
            },
            None => child.wait_with_output().await,
        };

        let output = match waited {
            Ok(output) => output,
            Err(e) => {
                let err = io_error("execute", e).with_operation(operation);
                log_op_error!(
                    "execute",
                    err.clone(),
                    duration_ms = elapsed_ms(start),
                    request_id = %request_id,
                    operation = operation
                );
                return Err(err);
            }
        };

        let stderr = match self.stderr {
            StderrMode::Capture => Some(output.stderr),
            StderrMode::Inherit => None,
        };
        let result = ExecutionResult::from_output(Some(output.stdout), stderr, output.status);

        log_op_end!(
            "execute",
            duration_ms = elapsed_ms(start),
            request_id = %request_id,
            operation = operation,
            exit_status = ?result.exit_status()
        );

        Ok(result)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new("vata")
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(VataError::Internal {
            message: "blocking execute called inside a tokio runtime; use run".to_string(),
        }
        .into());
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| io_error("runtime_build", e))?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let executor = Executor::default();
        assert_eq!(executor.program(), Path::new("vata"));
        assert_eq!(executor.timeout(), None);
        assert_eq!(executor.stderr_mode(), StderrMode::Capture);
    }

    #[test]
    fn test_builder_overrides() {
        let executor = Executor::new("/opt/vata/vata")
            .with_timeout(Some(Duration::from_secs(3)))
            .with_stderr(StderrMode::Inherit);
        assert_eq!(executor.program(), Path::new("/opt/vata/vata"));
        assert_eq!(executor.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(executor.stderr_mode(), StderrMode::Inherit);
    }

    #[test]
    fn test_stderr_mode_tokens() {
        let mode: StderrMode = serde_json::from_str("\"inherit\"").unwrap();
        assert_eq!(mode, StderrMode::Inherit);
        let rendered = serde_json::to_string(&StderrMode::Capture).unwrap();
        assert_eq!(rendered, "\"capture\"");
    }

    #[tokio::test]
    async fn test_blocking_execute_inside_runtime_is_rejected() {
        let err = Executor::default().execute(&[], None).unwrap_err();
        assert_eq!(err.kind(), vata_errors::ExErrorKind::Internal);
    }
}
