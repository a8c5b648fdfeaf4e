//! Authoring CLI for the built-in mission catalog.
//!
//! `validate` checks the content invariants that the type system cannot
//! express; `missions` prints the catalog summaries as JSON.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use opsdrill::content::builtin_missions;
use opsdrill::core::invariants::validate_mission;
use opsdrill::mission::Mission;

#[derive(Parser)]
#[command(name = "opsdrill", version, about = "Incident-response training engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check built-in mission content against the authoring invariants.
    Validate,
    /// Print mission summaries as JSON, in registration order.
    Missions,
}

fn main() {
    opsdrill::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Validate => cmd_validate(),
        Command::Missions => cmd_missions(),
    }
}

fn cmd_validate() -> Result<()> {
    let missions = builtin_missions();
    let errors: Vec<String> = missions.iter().flat_map(validate_mission).collect();
    if !errors.is_empty() {
        bail!("invariant violations:\n- {}", errors.join("\n- "));
    }
    println!("{} missions ok", missions.len());
    Ok(())
}

fn cmd_missions() -> Result<()> {
    let summaries: Vec<_> = builtin_missions().iter().map(Mission::summary).collect();
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
