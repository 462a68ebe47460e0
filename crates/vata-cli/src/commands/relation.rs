//! Operations that take an option bundle: sim, red, equiv, incl
//!
//! Each accepts either typed flags or a raw `--options` string, never both.
//! With neither, no `-o` is passed and the tool applies its own defaults.

use clap::Args;
use vata_core::{
    Algorithm, Command, Direction, DirectionOptions, Encoding, EquivalenceOptions,
    InclusionOptions, Operation, OptionBundle, Order, Result,
};

#[derive(Debug, Args)]
pub struct DirectionArgs {
    /// Automaton file
    pub aut: String,

    /// down/up (fwd/bwd for expl_fa)
    #[arg(long)]
    pub dir: Option<Direction>,

    /// Raw option string, e.g. "dir=up"
    #[arg(long, conflicts_with = "dir")]
    pub options: Option<String>,
}

#[derive(Debug, Args)]
pub struct EquivArgs {
    pub lhs: String,
    pub rhs: String,

    /// depth or breadth
    #[arg(long)]
    pub order: Option<Order>,

    /// Raw option string, e.g. "order=breadth"
    #[arg(long, conflicts_with = "order")]
    pub options: Option<String>,
}

#[derive(Debug, Args)]
pub struct InclArgs {
    /// Automaton whose language should be included
    pub lhs: String,
    /// Automaton whose language should include `lhs`
    pub rhs: String,

    #[arg(long)]
    pub dir: Option<Direction>,

    /// antichains or congr
    #[arg(long)]
    pub alg: Option<Algorithm>,

    /// Use simulation
    #[arg(long)]
    pub sim: bool,

    #[arg(long)]
    pub order: Option<Order>,

    /// Cache optimisation
    #[arg(long)]
    pub optc: bool,

    /// Recursive congruence
    #[arg(long)]
    pub rec: bool,

    /// Include the simulation computation in the reported time
    #[arg(long, value_name = "BOOL")]
    pub sim_time: Option<bool>,

    /// Raw option string, e.g. "dir=up,alg=congr,sim=yes"
    #[arg(
        long,
        conflicts_with_all = ["dir", "alg", "sim", "order", "optc", "rec", "sim_time"]
    )]
    pub options: Option<String>,
}

impl InclArgs {
    fn typed(&self) -> Option<InclusionOptions> {
        let any = self.dir.is_some()
            || self.alg.is_some()
            || self.sim
            || self.order.is_some()
            || self.optc
            || self.rec
            || self.sim_time.is_some();
        if !any {
            return None;
        }
        let defaults = InclusionOptions::default();
        Some(InclusionOptions::new(
            self.dir.unwrap_or(defaults.direction()),
            self.alg.unwrap_or(defaults.algorithm()),
            self.sim,
            self.order.unwrap_or(defaults.order()),
            self.optc,
            self.rec,
            self.sim_time.unwrap_or(defaults.simulation_time()),
        ))
    }
}

fn parsed(
    operation: Operation,
    encoding: Encoding,
    raw: Option<&str>,
) -> Result<Option<OptionBundle>> {
    match raw {
        Some(text) => OptionBundle::parse(operation, encoding, text).map(Some),
        None => Ok(None),
    }
}

pub fn direction(operation: Operation, args: DirectionArgs, encoding: Encoding) -> Result<Command> {
    let bundle = match parsed(operation, encoding, args.options.as_deref())? {
        Some(bundle) => Some(bundle),
        None => args.dir.map(|d| DirectionOptions::new(d).into()),
    };
    Command::new(encoding, operation, [args.aut], bundle)
}

pub fn equivalence(args: EquivArgs, encoding: Encoding) -> Result<Command> {
    let operation = Operation::Equivalence;
    let bundle = match parsed(operation, encoding, args.options.as_deref())? {
        Some(bundle) => Some(bundle),
        None => args.order.map(|o| EquivalenceOptions::new(o).into()),
    };
    Command::new(encoding, operation, [args.lhs, args.rhs], bundle)
}

pub fn inclusion(args: InclArgs, encoding: Encoding) -> Result<Command> {
    let operation = Operation::Inclusion;
    let bundle = match parsed(operation, encoding, args.options.as_deref())? {
        Some(bundle) => Some(bundle),
        None => args.typed().map(OptionBundle::from),
    };
    Command::new(encoding, operation, [args.lhs, args.rhs], bundle)
}
