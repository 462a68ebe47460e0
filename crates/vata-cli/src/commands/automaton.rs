//! Operations on whole automata: load, witness, cmpl, union, isect

use clap::Args;
use vata_core::{Command, Encoding, Operation, Result};

#[derive(Debug, Args)]
pub struct AutomatonArgs {
    /// Automaton file
    pub aut: String,
}

#[derive(Debug, Args)]
pub struct PairArgs {
    /// First automaton file
    pub lhs: String,
    /// Second automaton file
    pub rhs: String,
}

pub fn single(operation: Operation, args: AutomatonArgs, encoding: Encoding) -> Result<Command> {
    Command::new(encoding, operation, [args.aut], None)
}

pub fn pair(operation: Operation, args: PairArgs, encoding: Encoding) -> Result<Command> {
    Command::new(encoding, operation, [args.lhs, args.rhs], None)
}
