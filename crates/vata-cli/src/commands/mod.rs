//! Subcommand arguments and the shared run path

pub mod automaton;
pub mod relation;

use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use vata_core::{Command, Encoding, Prune, RunFlags};
use vata_engine::{ExecutionResult, VataConfig};
use vata_errors::{io_error, ExErrorKind, Result, VataError};

/// Exit code when the tool is killed after the timeout
pub const EXIT_TIMEOUT: i32 = 124;
/// Exit code when the tool produced no exit status
pub const EXIT_NO_STATUS: i32 = 1;
/// Exit code for validation, configuration and I/O errors of the wrapper itself
pub const EXIT_WRAPPER_ERROR: i32 = 2;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the vata binary (overrides config and VATA_BIN)
    #[arg(long = "vata", global = true, value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// Automaton encoding: expl, bdd-td, bdd-bu, expl_fa
    #[arg(short = 'r', long, global = true)]
    pub encoding: Option<Encoding>,

    /// Kill the tool after this many milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Ask the tool to print the operation time (-t)
    #[arg(short = 't', long = "time", global = true)]
    pub show_time: bool,

    /// Verbose tool output (-v)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Do not print the result automaton (-n)
    #[arg(short = 'n', long = "no-output", global = true)]
    pub dont_output_result: bool,

    /// Prune unreachable states first (-p)
    #[arg(short = 'p', long, global = true, conflicts_with = "prune_useless")]
    pub prune_unreachable: bool,

    /// Prune useless states first (-s)
    #[arg(short = 's', long, global = true)]
    pub prune_useless: bool,

    /// Print the command line instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Write the tool's stdout (or the JSON result with --json) to FILE
    #[arg(long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the result (or dry-run argv) as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    pub fn run_flags(&self) -> RunFlags {
        let prune = if self.prune_unreachable {
            Prune::Unreachable
        } else if self.prune_useless {
            Prune::Useless
        } else {
            Prune::None
        };
        RunFlags {
            show_time: self.show_time,
            verbose: self.verbose,
            dont_output_result: self.dont_output_result,
            prune,
        }
    }

    /// Config file and environment first, command-line flags on top
    pub fn resolve_config(&self) -> Result<VataConfig> {
        let mut config = VataConfig::load(self.config.as_deref())?;
        if let Some(binary) = &self.binary {
            config.binary = binary.clone();
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
        Ok(config)
    }
}

/// Print, or execute and forward; returns the process exit code
pub fn dispatch(global: &GlobalArgs, config: &VataConfig, command: &Command) -> Result<i32> {
    let args = command.to_args();

    if global.dry_run {
        let line = if global.json {
            let mut argv = vec![config.binary.display().to_string()];
            argv.extend(args);
            serde_json::to_string(&argv).map_err(VataError::from)?
        } else {
            std::iter::once(config.binary.display().to_string())
                .chain(args)
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("{}", line);
        return Ok(0);
    }

    let result = match config.executor().execute_command(command, None) {
        Ok(result) => result,
        Err(e) if e.kind() == ExErrorKind::Timeout => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_TIMEOUT);
        }
        Err(e) => return Err(e),
    };

    forward(global, &result)?;
    Ok(result.exit_status().unwrap_or(EXIT_NO_STATUS))
}

fn forward(global: &GlobalArgs, result: &ExecutionResult) -> Result<()> {
    if global.json {
        let json = serde_json::to_string_pretty(result).map_err(VataError::from)?;
        if let Some(path) = &global.output {
            return std::fs::write(path, json + "\n").map_err(|e| io_error("write_json", e));
        }
        println!("{}", json);
        return Ok(());
    }

    match &global.output {
        Some(path) => result.write_stdout_to_path(path)?,
        None => {
            let mut stdout = io::stdout().lock();
            result
                .write_stdout_to(&mut stdout)
                .and_then(|_| stdout.flush())
                .map_err(|e| io_error("forward_stdout", e))?;
        }
    }

    let mut stderr = io::stderr().lock();
    result
        .write_stderr_to(&mut stderr)
        .map_err(|e| io_error("forward_stderr", e))
}
