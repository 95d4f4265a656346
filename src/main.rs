use anyhow::Result;
use clap::{Parser, Subcommand};

mod date;
mod domain;
mod extraction;
mod fetch;
mod pdf;
mod readable;
mod telemetry;

#[derive(Parser)]
#[command(name = "webinfo", about = "Web resource metadata extraction")]
struct Cli {
    /// Pretty-print the JSON record
    #[arg(global = true, long, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Extract(extraction::ExtractCmd),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and WEBINFO_LOG_FORMAT
    telemetry::init_tracing();

    match cli.command {
        Commands::Extract(args) => extraction::run(args, cli.pretty)?,
    }

    Ok(())
}
