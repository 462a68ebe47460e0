//! Command model
//!
//! A [`Command`] is one request to `vata`: encoding, operation, operand
//! files, an optional option bundle, and run flags. Fields are private and
//! [`Command::new`] is the only way to build one from parts, so a command
//! whose bundle does not belong to its operation cannot exist.

use crate::errors::Result;
use crate::flags::RunFlags;
use crate::options::{
    CodedEnum, DirectionOptions, Encoding, EquivalenceOptions, InclusionOptions, Operation,
    OptionBundle,
};
use crate::serializer::serialize_command;
use vata_errors::VataError;

/// Immutable, validated request to `vata`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    encoding: Encoding,
    operation: Operation,
    operands: Vec<String>,
    options: Option<OptionBundle>,
    flags: RunFlags,
}

impl Command {
    /// Build a command, validating operand count and bundle variant
    ///
    /// Operations without options (`load`, `witness`, `cmpl`, `union`,
    /// `isect`, `help`) reject any bundle. `incl`, `sim`, `red` and `equiv`
    /// accept either no bundle, leaving `vata` on its own defaults, or
    /// exactly their own bundle variant.
    pub fn new<I, S>(
        encoding: Encoding,
        operation: Operation,
        operands: I,
        options: Option<OptionBundle>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let operands: Vec<String> = operands.into_iter().map(Into::into).collect();

        if operands.len() != operation.arity() {
            return Err(VataError::OperandCount {
                operation: operation.token().to_string(),
                expected: operation.arity(),
                found: operands.len(),
            });
        }

        if let Some(bundle) = &options {
            match operation.bundle_kind() {
                Some(kind) if kind == bundle.kind() => {}
                expected => {
                    return Err(VataError::OptionsMismatch {
                        operation: operation.token().to_string(),
                        expected: expected.map_or("no", |k| k.name()),
                        found: bundle.kind().name(),
                    })
                }
            }
        }

        Ok(Self {
            encoding,
            operation,
            operands,
            options,
            flags: RunFlags::default(),
        })
    }

    /// Same command with `flags` replacing the current run flags
    pub fn with_flags(self, flags: RunFlags) -> Self {
        Self { flags, ..self }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Operand files in the order `vata` receives them
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    pub fn options(&self) -> Option<&OptionBundle> {
        self.options.as_ref()
    }

    pub fn flags(&self) -> RunFlags {
        self.flags
    }

    /// Argument vector for this command
    pub fn to_args(&self) -> Vec<String> {
        serialize_command(self)
    }

    // ===== Per-operation constructors =====

    pub fn load(encoding: Encoding, aut: impl Into<String>) -> Result<Self> {
        Self::new(encoding, Operation::Load, [aut.into()], None)
    }

    pub fn witness(encoding: Encoding, aut: impl Into<String>) -> Result<Self> {
        Self::new(encoding, Operation::Witness, [aut.into()], None)
    }

    pub fn complement(encoding: Encoding, aut: impl Into<String>) -> Result<Self> {
        Self::new(encoding, Operation::Complement, [aut.into()], None)
    }

    pub fn union(
        encoding: Encoding,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Result<Self> {
        Self::new(encoding, Operation::Union, [lhs.into(), rhs.into()], None)
    }

    pub fn intersection(
        encoding: Encoding,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            encoding,
            Operation::Intersection,
            [lhs.into(), rhs.into()],
            None,
        )
    }

    pub fn simulation(
        encoding: Encoding,
        aut: impl Into<String>,
        options: Option<DirectionOptions>,
    ) -> Result<Self> {
        Self::new(
            encoding,
            Operation::Simulation,
            [aut.into()],
            options.map(OptionBundle::from),
        )
    }

    pub fn reduction(
        encoding: Encoding,
        aut: impl Into<String>,
        options: Option<DirectionOptions>,
    ) -> Result<Self> {
        Self::new(
            encoding,
            Operation::Reduction,
            [aut.into()],
            options.map(OptionBundle::from),
        )
    }

    /// Check whether L(`lhs`) is a subset of L(`rhs`)
    pub fn inclusion(
        encoding: Encoding,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        options: Option<InclusionOptions>,
    ) -> Result<Self> {
        Self::new(
            encoding,
            Operation::Inclusion,
            [lhs.into(), rhs.into()],
            options.map(OptionBundle::from),
        )
    }

    pub fn equivalence(
        encoding: Encoding,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        options: Option<EquivalenceOptions>,
    ) -> Result<Self> {
        Self::new(
            encoding,
            Operation::Equivalence,
            [lhs.into(), rhs.into()],
            options.map(OptionBundle::from),
        )
    }

    pub fn help(encoding: Encoding) -> Self {
        Self {
            encoding,
            operation: Operation::Help,
            operands: Vec::new(),
            options: None,
            flags: RunFlags::default(),
        }
    }
}
