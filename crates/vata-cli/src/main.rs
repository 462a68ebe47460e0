//! vata-wrap
//!
//! Command-line front end for the VATA tree automata tool: validates the
//! request, builds the argument vector and runs `vata` with it.

use clap::{Parser, Subcommand};
use commands::{automaton, relation};
use vata_core::Operation;
use vata_logging::Profile;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "vata-wrap")]
#[command(about = "Validated front end for the VATA tool", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load an automaton and print it
    Load(automaton::AutomatonArgs),
    /// Print a witness of the automaton's language
    Witness(automaton::AutomatonArgs),
    /// Complement an automaton
    Cmpl(automaton::AutomatonArgs),
    /// Union of two automata
    Union(automaton::PairArgs),
    /// Intersection of two automata
    Isect(automaton::PairArgs),
    /// Compute the simulation relation
    Sim(relation::DirectionArgs),
    /// Reduce an automaton using simulation
    Red(relation::DirectionArgs),
    /// Check language equivalence
    Equiv(relation::EquivArgs),
    /// Check language inclusion
    Incl(relation::InclArgs),
    /// Print the tool's own help
    Help,
}

fn main() {
    dotenvy::dotenv().ok();
    if std::env::var_os("RUST_LOG").is_some() {
        vata_logging::init(Profile::Development);
    }

    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            commands::EXIT_WRAPPER_ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> vata_errors::Result<i32> {
    let config = cli.global.resolve_config()?;
    let encoding = cli.global.encoding.unwrap_or(config.encoding);

    let command = match cli.command {
        Commands::Load(args) => automaton::single(Operation::Load, args, encoding),
        Commands::Witness(args) => automaton::single(Operation::Witness, args, encoding),
        Commands::Cmpl(args) => automaton::single(Operation::Complement, args, encoding),
        Commands::Union(args) => automaton::pair(Operation::Union, args, encoding),
        Commands::Isect(args) => automaton::pair(Operation::Intersection, args, encoding),
        Commands::Sim(args) => relation::direction(Operation::Simulation, args, encoding),
        Commands::Red(args) => relation::direction(Operation::Reduction, args, encoding),
        Commands::Equiv(args) => relation::equivalence(args, encoding),
        Commands::Incl(args) => relation::inclusion(args, encoding),
        Commands::Help => Ok(vata_core::Command::help(encoding)),
    }?
    .with_flags(cli.global.run_flags());

    commands::dispatch(&cli.global, &config, &command)
}
