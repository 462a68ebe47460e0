//! Captured output of one `vata` execution

use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitStatus;
use vata_errors::{io_error, Result};

/// Decoded output and exit status of a finished (or never started) run
///
/// `None` means the stream was not captured or the status does not exist
/// (spawn failure, killed by a signal). A captured stream that stayed empty
/// is `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_status: Option<i32>,
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

impl ExecutionResult {
    pub fn new(stdout: Option<String>, stderr: Option<String>, exit_status: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_status,
        }
    }

    pub(crate) fn from_output(
        stdout: Option<Vec<u8>>,
        stderr: Option<Vec<u8>>,
        status: ExitStatus,
    ) -> Self {
        Self::new(stdout.map(decode), stderr.map(decode), status.code())
    }

    /// Result for a process that could not be started
    pub(crate) fn spawn_failure(message: String) -> Self {
        Self::new(None, Some(message), None)
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    pub fn exit_status(&self) -> Option<i32> {
        self.exit_status
    }

    /// True only for exit status 0
    pub fn success(&self) -> bool {
        self.exit_status == Some(0)
    }

    // ===== Printing =====

    /// Print stdout then stderr to the terminal, each followed by a newline
    pub fn print(&self) -> io::Result<()> {
        self.print_to(&mut io::stdout().lock())
    }

    pub fn print_stdout(&self) -> io::Result<()> {
        write_line_if_some(self.stdout.as_deref(), &mut io::stdout().lock())
    }

    pub fn print_stderr(&self) -> io::Result<()> {
        write_line_if_some(self.stderr.as_deref(), &mut io::stdout().lock())
    }

    /// Line-terminated rendering used by the `print*` family; absent fields are skipped
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_line_if_some(self.stdout.as_deref(), out)?;
        write_line_if_some(self.stderr.as_deref(), out)
    }

    // ===== Writing =====

    /// Write stdout then stderr to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_stdout_to(out)?;
        self.write_stderr_to(out)
    }

    pub fn write_stdout_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_if_some(self.stdout.as_deref(), out)
    }

    pub fn write_stderr_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_if_some(self.stderr.as_deref(), out)
    }

    /// Create or truncate `path` and write stdout then stderr into it
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_path_with(path.as_ref(), |r, f| r.write_to(f))
    }

    pub fn write_stdout_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_path_with(path.as_ref(), |r, f| r.write_stdout_to(f))
    }

    pub fn write_stderr_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_path_with(path.as_ref(), |r, f| r.write_stderr_to(f))
    }

    fn write_path_with<F>(&self, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&Self, &mut File) -> io::Result<()>,
    {
        let mut file = File::create(path).map_err(|e| io_error("write_result", e))?;
        write(self, &mut file).map_err(|e| io_error("write_result", e))
    }
}

fn write_if_some<W: Write>(text: Option<&str>, out: &mut W) -> io::Result<()> {
    match text {
        Some(text) => out.write_all(text.as_bytes()),
        None => Ok(()),
    }
}

fn write_line_if_some<W: Write>(text: Option<&str>, out: &mut W) -> io::Result<()> {
    match text {
        Some(text) => writeln!(out, "{}", text),
        None => Ok(()),
    }
}
