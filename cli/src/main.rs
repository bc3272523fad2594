#![deny(missing_docs)]

//! # Fotition CLI
//!
//! Command Line Interface for the Fotition Objective-C client generator.
//!
//! Supported Commands:
//! - `declare`: Shows the Objective-C declaration for a schema type expression.
//! - `name`: Normalizes raw schema names into identifiers, class and file names.
//! - `options`: Prints the effective generator options.

use clap::{Parser, Subcommand};
use fotition_core::layout::{GENERATOR_HELP, GENERATOR_NAME};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliResult;
use crate::options::OptionArgs;

mod error;
mod inspect;
mod options;

#[derive(Parser, Debug)]
#[clap(name = GENERATOR_NAME, author, version, about = GENERATOR_HELP)]
struct Cli {
    #[clap(flatten)]
    options: OptionArgs,

    /// Log resolution decisions (equivalent to `RUST_LOG=fotition_core=debug`).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the declaration of a schema type expression.
    Declare(inspect::DeclareArgs),
    /// Normalize raw schema names.
    Name(inspect::NameArgs),
    /// Print the effective generator options.
    Options(inspect::OptionsArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fotition_core=debug,fotition_cli=debug"
    } else {
        "fotition_core=info,fotition_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.options.resolver_config()?;
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Declare(args) => inspect::declare(args, &config, &mut stdout)?,
        Commands::Name(args) => inspect::name(args, &config, &mut stdout)?,
        Commands::Options(args) => inspect::options(args, &config, &mut stdout)?,
    }

    Ok(())
}
