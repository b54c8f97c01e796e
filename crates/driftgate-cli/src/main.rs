//! driftgate CLI — structural drift verification for LLM-documented code.
//!
//! This binary provides the `driftgate` command with subcommands for verifying
//! a documented file against its original and for running the full
//! generate-then-verify documentation pipeline. See `driftgate --help`.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn driftgate_output::OutputFormatter> = if cli.json {
        Box::new(driftgate_output::json::JsonFormatter)
    } else {
        Box::new(driftgate_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Verify { before, after } => {
            commands::verify::run(&*formatter, cli.verbose, &before, &after)
        }
        Commands::Document { file, inline, out } => {
            commands::document::run(&*formatter, cli.verbose, &file, inline, out.as_deref())
        }
    };

    std::process::exit(exit_code);
}
