//! One-call helpers: build a command, serialize it, run it

use crate::config::VataConfig;
use crate::executor::Executor;
use crate::result::ExecutionResult;
use vata_core::{
    Command, DirectionOptions, Encoding, EquivalenceOptions, InclusionOptions, RunFlags,
};
use vata_errors::Result;

/// Handle to a configured `vata` binary
///
/// Every helper validates its inputs before anything is spawned, so a
/// validation error never reaches the process layer.
#[derive(Debug, Clone, Default)]
pub struct Vata {
    executor: Executor,
    encoding: Encoding,
    flags: RunFlags,
}

impl Vata {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            encoding: Encoding::default(),
            flags: RunFlags::default(),
        }
    }

    pub fn from_config(config: &VataConfig) -> Self {
        Self::new(config.executor()).with_encoding(config.encoding)
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Flags attached to every command built by the helpers
    pub fn with_flags(mut self, flags: RunFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn flags(&self) -> RunFlags {
        self.flags
    }

    /// Execute an already built command as is
    ///
    /// # Errors
    ///
    /// Whatever [`Executor::execute_command`] returns.
    pub fn run_command(&self, command: &Command) -> Result<ExecutionResult> {
        self.executor.execute_command(command, None)
    }

    /// Async form of [`run_command`](Self::run_command)
    ///
    /// # Errors
    ///
    /// Whatever [`Executor::run_command`] returns.
    pub async fn run_command_async(&self, command: &Command) -> Result<ExecutionResult> {
        self.executor.run_command(command, None).await
    }

    fn run(&self, command: vata_core::Result<Command>) -> Result<ExecutionResult> {
        let command = command?.with_flags(self.flags);
        self.run_command(&command)
    }

    // ===== Per-operation helpers =====
    // Each returns the validation error of the underlying `Command` builder
    // or an execution error.

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn load(&self, aut: &str) -> Result<ExecutionResult> {
        self.run(Command::load(self.encoding, aut))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn witness(&self, aut: &str) -> Result<ExecutionResult> {
        self.run(Command::witness(self.encoding, aut))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn complement(&self, aut: &str) -> Result<ExecutionResult> {
        self.run(Command::complement(self.encoding, aut))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn union(&self, lhs: &str, rhs: &str) -> Result<ExecutionResult> {
        self.run(Command::union(self.encoding, lhs, rhs))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn intersection(&self, lhs: &str, rhs: &str) -> Result<ExecutionResult> {
        self.run(Command::intersection(self.encoding, lhs, rhs))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn simulation(
        &self,
        aut: &str,
        options: Option<DirectionOptions>,
    ) -> Result<ExecutionResult> {
        self.run(Command::simulation(self.encoding, aut, options))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn reduction(
        &self,
        aut: &str,
        options: Option<DirectionOptions>,
    ) -> Result<ExecutionResult> {
        self.run(Command::reduction(self.encoding, aut, options))
    }

    /// Check whether the language of `lhs` is included in that of `rhs`
    ///
    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn inclusion(
        &self,
        lhs: &str,
        rhs: &str,
        options: Option<InclusionOptions>,
    ) -> Result<ExecutionResult> {
        self.run(Command::inclusion(self.encoding, lhs, rhs, options))
    }

    /// # Errors
    ///
    /// Validation or execution failure.
    pub fn equivalence(
        &self,
        lhs: &str,
        rhs: &str,
        options: Option<EquivalenceOptions>,
    ) -> Result<ExecutionResult> {
        self.run(Command::equivalence(self.encoding, lhs, rhs, options))
    }

    /// # Errors
    ///
    /// Execution failure only.
    pub fn help(&self) -> Result<ExecutionResult> {
        self.run(Ok(Command::help(self.encoding)))
    }
}
